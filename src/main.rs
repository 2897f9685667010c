use std::fs;
use std::path::PathBuf;

use adlytics::engine::analyzer::CampaignAnalyzer;
use adlytics::logging;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "adlytics")]
#[command(about = "Parallel campaign performance analyzer for CSV exports", long_about = None)]
struct Args {
    /// Path to the CSV file to process
    #[arg(short, long)]
    input: PathBuf,

    /// Folder for the result files
    #[arg(short, long, default_value = "result")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    fs::create_dir_all(&args.output)?;

    info!("Starting campaign analysis");
    let analyzer = CampaignAnalyzer::from_config();
    let summary = analyzer.analyze(&args.input, &args.output).await?;

    println!(
        "Processed {} records across {} campaigns in {:.2?}",
        summary.records, summary.campaigns, summary.elapsed
    );
    println!();
    println!("Output files:");
    println!("  - {} (all campaigns)", summary.stats_file.display());
    println!("  - {} (highest CTR)", summary.top_ctr_file.display());
    println!("  - {} (lowest CPA)", summary.top_cpa_file.display());

    Ok(())
}
