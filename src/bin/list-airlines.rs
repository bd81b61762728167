use clap::Parser;
use seatmap_crawler::airlines::lister;
use seatmap_crawler::config::ListerConfig;
use seatmap_crawler::init_tracing;
use seatmap_crawler::output;
use seatmap_crawler::page::HttpPage;
use tracing::info;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = ListerConfig::parse();

    let url = Url::parse(&config.url)?;
    let page = HttpPage::new(config.timeout())?;
    let directory = lister::list_airlines(&page, &url).await?;

    output::write_csv_column(&config.csv, "Airline", &directory.names).await?;
    output::write_json_pretty(&config.json, &directory.names).await?;
    if let Some(refs) = &config.refs {
        output::write_json_pretty(refs, &directory.refs).await?;
        info!("Wrote {} airline links to {}", directory.refs.len(), refs.display());
    }

    info!("Scraped {} airlines", directory.names.len());
    Ok(())
}
