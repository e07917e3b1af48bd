mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use imgdim::scan::{self, ScanOptions, ScanReport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ScanOptions::new()
        .with_recursive(cli.recursive)
        .with_threads(cli.threads)
        .with_unrecognized(cli.all);

    let paths = scan::collect_paths(&cli.paths, options.recursive)?;
    let report = scan::scan_paths(&paths, &options)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &ScanReport) {
    for entry in &report.entries {
        println!("{entry}");
    }

    let summary = &report.summary;
    eprintln!();
    eprintln!(
        "{} files, {} recognized, {} failed",
        summary.total, summary.recognized, summary.failed
    );
    for (format, count) in &summary.by_format {
        eprintln!("  {:<5} {}", format, count);
    }
}
