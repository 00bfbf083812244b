use flowdeck_catalog::{BetaFlag, CategorizedData, ItemRecord, LegacyFlag};
use serde::Serialize;
use std::io::Write;

use crate::cli::{CategoriesArgs, OutputFormat};
use crate::commands::load_catalog;
use crate::error::CliResult;
use crate::output::render_categories;

/// Per-category counts shown by `flowdeck categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CategoryRow {
    pub(crate) name: String,
    pub(crate) total: usize,
    pub(crate) legacy: usize,
    pub(crate) beta: usize,
}

pub(crate) fn handle_categories<W: Write>(
    args: &CategoriesArgs,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    let catalog = load_catalog(&args.catalog)?;
    render_categories(&category_rows(&catalog), format, out)
}

pub(crate) fn category_rows(catalog: &CategorizedData<ItemRecord>) -> Vec<CategoryRow> {
    catalog
        .iter()
        .map(|(name, items)| CategoryRow {
            name: name.clone(),
            total: items.len(),
            legacy: items.values().filter(|record| record.is_legacy()).count(),
            beta: items.values().filter(|record| record.is_beta()).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_catalog::decode_catalog;
    use flowdeck_test_support::fixtures::registry_catalog;

    #[test]
    fn rows_count_flags_per_category() {
        let catalog = decode_catalog(&registry_catalog().to_string()).expect("fixture decodes");
        let rows = category_rows(&catalog);
        let row = |name: &str| {
            rows.iter()
                .find(|row| row.name == name)
                .cloned()
                .expect("category row present")
        };
        assert_eq!(
            row("inputs"),
            CategoryRow {
                name: "inputs".into(),
                total: 3,
                legacy: 1,
                beta: 0,
            }
        );
        assert_eq!(row("models").beta, 1);
        assert_eq!(row("helpers").total, 0);
        assert_eq!(rows.len(), 4);
    }
}
