//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, FetchOptions, FetchOutcome, RenderOptions};
use crate::app::logging;
use crate::domain::{AppError, Category};

#[derive(Parser)]
#[command(name = "dashcat")]
#[command(version)]
#[command(
    about = "Catalog dashboard-server workbooks into a JSON snapshot and a searchable page",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./dashcat.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch workbooks and write the catalog snapshot
    #[clap(visible_alias = "f")]
    Fetch {
        /// Snapshot output path
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Render the catalog page from a snapshot
    #[clap(visible_alias = "r")]
    Render {
        /// Snapshot input path
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,
        /// Page output path
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Fetch { output } => run_fetch(config, output),
        Commands::Render { input, output } => run_render(config, input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_fetch(config: Option<&std::path::Path>, output: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = api::fetch(config, FetchOptions { output })?;
    print_fetch_summary(&outcome);
    Ok(())
}

fn print_fetch_summary(outcome: &FetchOutcome) {
    let report = &outcome.report;
    println!("✅ Saved {} workbooks to {}", report.total_emitted(), outcome.snapshot_path.display());

    for category in Category::ALL {
        let entry = report.category(category);
        println!(
            "  {}: {} emitted ({} listed, {} skipped by owner rule, {} without views)",
            category.label(),
            entry.emitted,
            entry.listed,
            entry.skipped_by_rule,
            entry.without_views
        );
    }

    if report.warning_count() > 0 {
        println!("⚠️  Recovered {} sub-resource failure(s):", report.warning_count());
        for category in Category::ALL {
            for warning in &report.category(category).warnings {
                println!("  • {}", warning);
            }
        }
    }
}

fn run_render(
    config: Option<&std::path::Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let outcome = api::render(config, RenderOptions { input, output })?;
    println!("✅ Page generated: {}", outcome.page_path.display());
    println!(
        "📊 Total dashboards: {} ({} production, {} playground)",
        outcome.total(),
        outcome.production,
        outcome.playground
    );
    Ok(())
}
