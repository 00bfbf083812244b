//! Argument parsing, settings resolution, and command dispatch.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use flowdeck_config::{SettingsOverrides, SidebarSettings};
use flowdeck_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::commands::categories::handle_categories;
use crate::commands::filter::handle_filter;
use crate::error::CliResult;

const BUILD_SHA: &str = match option_env!("FLOWDECK_BUILD_SHA") {
    Some(sha) => sha,
    None => "dev",
};

/// Parses process arguments, executes the requested command against stdout,
/// and returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from(std::env::args_os(), &mut out)
}

/// Parses `args` (including the program name), executes the command, and
/// writes rendered output to `out`. Errors go to stderr. Returns the exit code.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };
    let command = command_label(&cli.command);

    match execute(cli, out) {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(command, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

fn execute<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let overrides = match &cli.command {
        Command::Filter(args) => args.overrides(),
        Command::Categories(_) => SettingsOverrides::default(),
    };
    let settings = resolve_settings(cli.config.as_deref(), cli.log_level.clone(), overrides)?;
    install_logging(&settings);

    let span = tracing::info_span!("command", name = command_label(&cli.command));
    let _entered = span.enter();

    match cli.command {
        Command::Filter(args) => handle_filter(&settings, &args, cli.output, out),
        Command::Categories(args) => handle_categories(&args, cli.output, out),
    }
}

/// Settings file first, then flag/env overrides.
pub(crate) fn resolve_settings(
    config: Option<&Path>,
    log_level: Option<String>,
    overrides: SettingsOverrides,
) -> CliResult<SidebarSettings> {
    let base = SidebarSettings::load_or_default(config)?;
    Ok(base.apply_overrides(SettingsOverrides {
        log_level,
        ..overrides
    }))
}

fn install_logging(settings: &SidebarSettings) {
    let config = LoggingConfig {
        level: &settings.log_level,
        format: settings.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: BUILD_SHA,
    };
    if let Err(err) = init_logging(&config) {
        tracing::debug!(error = %err, "logging already initialised");
    }
}

#[derive(Parser)]
#[command(
    name = "flowdeck",
    about = "Inspect and filter component palette catalogs"
)]
pub(crate) struct Cli {
    #[arg(long, global = true, env = "FLOWDECK_CONFIG", help = "Sidebar settings JSON file")]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "FLOWDECK_LOG_LEVEL",
        help = "Log level directive, overriding the settings file"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Apply the sidebar filters to a catalog.
    Filter(FilterArgs),
    /// Summarise the categories of a catalog.
    Categories(CategoriesArgs),
}

#[derive(Args)]
pub(crate) struct FilterArgs {
    #[arg(help = "Catalog JSON file, or '-' for stdin")]
    pub(crate) catalog: PathBuf,
    #[arg(long, help = "Keep legacy components")]
    pub(crate) show_legacy: bool,
    #[arg(long, conflicts_with = "hide_beta", help = "Keep beta components")]
    pub(crate) show_beta: bool,
    #[arg(long, help = "Drop beta components")]
    pub(crate) hide_beta: bool,
    #[arg(long, help = "Free-text search over names and descriptions")]
    pub(crate) search: Option<String>,
    #[arg(long, help = "Drop categories left without items")]
    pub(crate) hide_empty: bool,
}

impl FilterArgs {
    fn overrides(&self) -> SettingsOverrides {
        let show_beta = if self.hide_beta {
            Some(false)
        } else {
            self.show_beta.then_some(true)
        };
        SettingsOverrides {
            show_legacy: self.show_legacy.then_some(true),
            show_beta,
            search: self.search.clone(),
            hide_empty_categories: self.hide_empty.then_some(true),
            log_level: None,
        }
    }
}

#[derive(Args)]
pub(crate) struct CategoriesArgs {
    #[arg(help = "Catalog JSON file, or '-' for stdin")]
    pub(crate) catalog: PathBuf,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub(crate) const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Filter(_) => "filter",
        Command::Categories(_) => "categories",
    }
}
