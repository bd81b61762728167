use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use seatmap_crawler::config::DetailConfig;
use seatmap_crawler::output;
use seatmap_crawler::page::HttpPage;
use seatmap_crawler::store::JsonDirStore;
use seatmap_crawler::{init_tracing, AirlineRef, DetailScraper};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = DetailConfig::parse();

    let airlines: Vec<AirlineRef> = output::read_json(&config.input).await?;
    info!("Loaded {} airlines from {}", airlines.len(), config.input.display());

    let page = HttpPage::new(config.timeout())?;
    let storage = JsonDirStore::open(&config.output_dir).await?;
    let scraper = DetailScraper::new(page, storage, &config.origin, config.delay());

    let progress = ProgressBar::new(airlines.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta}]")?,
    );
    scraper.run(&airlines, &progress).await;
    progress.finish();

    Ok(())
}
