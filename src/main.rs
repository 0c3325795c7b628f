// Main entry point - CLI parsing, wiring and exit status
mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::application::chart_checkers::{
    ChartDescriptionChecker, ChartTitleChecker, ChartUnitChecker, DashboardLinkChecker,
    SparklineFontSizeChecker, SparklineSublabelChecker,
};
use crate::application::checker::Checker;
use crate::application::color_checker::ColorChecker;
use crate::application::index_checker::IndexChecker;
use crate::application::query_checker::{ChartQueryChecker, ParameterQueryChecker};
use crate::application::reporter::Reporter;
use crate::infrastructure::config::load_lint_config;
use crate::infrastructure::dashboard_repository::{load_dashboards, DashboardTarget};
use crate::presentation::console::{print_palette, print_report};

#[derive(Parser)]
#[command(name = "dashboard-lint")]
#[command(about = "Validate integration dashboards against the style rules")]
struct Cli {
    /// Dashboard JSON file, or an integration directory holding dashboards/*.json
    path: PathBuf,
    /// Rewrite non-palette colors in place to the nearest palette color
    #[arg(short = 'f', long)]
    autofix: bool,
    /// Skip the palette preview
    #[arg(long)]
    no_palette: bool,
}

fn checkers(autofix: bool) -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(ColorChecker::new(autofix)),
        Box::new(ChartTitleChecker),
        Box::new(SparklineSublabelChecker),
        Box::new(SparklineFontSizeChecker),
        Box::new(ChartDescriptionChecker),
        Box::new(ChartUnitChecker),
        Box::new(DashboardLinkChecker),
        Box::new(ChartQueryChecker),
        Box::new(ParameterQueryChecker),
        Box::new(IndexChecker),
    ]
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_lint_config()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if config.output.print_palette && !cli.no_palette {
        print_palette(config.output.swatches);
    }

    // Load every dashboard once; no dashboards is fatal
    let target = DashboardTarget::resolve(&cli.path);
    let dashboards = load_dashboards(&target)?;
    tracing::debug!("Loaded {} dashboards", dashboards.files().len());

    let mut reporter = Reporter::new();
    for checker in checkers(cli.autofix) {
        let before = reporter.len();
        checker.run(&dashboards, &mut reporter)?;
        tracing::debug!("{} reported {} findings", checker.name(), reporter.len() - before);
    }

    tracing::debug!(clean = reporter.is_empty(), "All checkers finished");

    let summary = reporter.summarize();
    print_report(&summary, config.output.swatches);

    Ok(summary.exit_code())
}
