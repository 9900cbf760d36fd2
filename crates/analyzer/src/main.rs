use clap::Parser;

use analyzer::boot;
use analyzer::cli::Cli;
use analyzer::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let cli = Cli::parse();
    let summary = pipeline::run(cli.into_options()?)?;
    println!(
        "Parsed {} lines ({} skipped); report written to {}",
        summary.parsed,
        summary.skipped,
        summary.report_path.display()
    );
    Ok(())
}
