use clap::Parser;
use seatmap_crawler::config::SummaryConfig;
use seatmap_crawler::store::JsonDirStore;
use seatmap_crawler::{init_tracing, output, summary};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = SummaryConfig::parse();

    let store = JsonDirStore::open(&config.output_dir).await?;
    let (summary, records) = summary::summarize(&store).await?;
    output::write_json_pretty(&config.data, &records).await?;
    output::write_json_pretty(&config.out, &summary).await?;

    info!("Data saved to {}", config.data.display());
    info!("Summary saved to {}", config.out.display());
    Ok(())
}
