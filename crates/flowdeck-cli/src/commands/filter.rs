use flowdeck_catalog::FilterPipeline;
use flowdeck_config::SidebarSettings;
use std::io::Write;

use crate::cli::{FilterArgs, OutputFormat};
use crate::commands::load_catalog;
use crate::error::CliResult;
use crate::output::render_filtered;

pub(crate) fn handle_filter<W: Write>(
    settings: &SidebarSettings,
    args: &FilterArgs,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    let catalog = load_catalog(&args.catalog)?;
    let outcome = FilterPipeline::new(settings.filter_options()).run(&catalog);
    tracing::info!(
        catalog = %args.catalog.display(),
        items_in = outcome.summary.items_in,
        items_out = outcome.summary.items_out,
        "catalog filtered"
    );
    render_filtered(&outcome, format, out)
}
