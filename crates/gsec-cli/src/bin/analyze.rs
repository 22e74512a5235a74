use anyhow::Result;
use clap::Parser;
use gsec_cli::bootstrap;
use gsec_core::settings::AnalyzerSettings;
use gsec_data::aggregator::AuctionAggregator;
use gsec_data::reader;
use gsec_report::render_report;

fn main() -> Result<()> {
    let settings = AnalyzerSettings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("gsec-analyze v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Loading records from {}", settings.data_dir.display());

    let outcome = reader::load_records(&settings.data_dir);
    tracing::info!(
        "Loaded {} records from {} candidate files",
        outcome.records.len(),
        outcome.file_count
    );

    let summary = AuctionAggregator::summarize(&outcome.records, outcome.file_count);
    print!("{}", render_report(&summary));

    // Per-file failures were already reported on stderr; an empty or partial
    // data set still produces a complete report and a zero exit.
    Ok(())
}
