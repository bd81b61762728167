use clap::Parser;
use std::path::PathBuf;
use tokio::time::Duration;

pub const DIRECTORY_URL: &str = "https://seatmaps.com/airlines/";
pub const ORIGIN: &str = "https://seatmaps.com";

pub const LIST_CSV_FILE: &str = "airlines_list.csv";
pub const LIST_JSON_FILE: &str = "airlines_list.json";
pub const REFS_JSON_FILE: &str = "airlines_refs.json";
pub const OUTPUT_DIR: &str = "airlines_data";
pub const SUMMARY_FILE: &str = "seatmaps_summary.json";
pub const DATA_FILE: &str = "seatmaps_data.json";

pub const DIRECTORY_TIMEOUT_MS: u64 = 60_000;
pub const DETAIL_TIMEOUT_MS: u64 = 30_000;
pub const REQUEST_DELAY_MS: u64 = 1_500;

/// Collect airline names from the seatmaps directory page.
#[derive(Debug, Parser)]
#[command(name = "list-airlines")]
pub struct ListerConfig {
    /// Directory page to read
    #[arg(long, default_value = DIRECTORY_URL)]
    pub url: String,

    #[arg(long, default_value = LIST_CSV_FILE)]
    pub csv: PathBuf,

    #[arg(long, default_value = LIST_JSON_FILE)]
    pub json: PathBuf,

    /// Also write `{name, url}` pairs usable as the detail scraper input
    #[arg(long)]
    pub refs: Option<PathBuf>,

    #[arg(long, default_value_t = DIRECTORY_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl ListerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Visit every airline page and store its aircraft seatmap links.
#[derive(Debug, Parser)]
#[command(name = "seatmap-crawler")]
pub struct DetailConfig {
    /// JSON array of `{name, url}` objects
    #[arg(long, default_value = REFS_JSON_FILE)]
    pub input: PathBuf,

    #[arg(long, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Prefix for relative seatmap links
    #[arg(long, default_value = ORIGIN)]
    pub origin: String,

    #[arg(long, default_value_t = DETAIL_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pause after every stored airline
    #[arg(long, default_value_t = REQUEST_DELAY_MS)]
    pub delay_ms: u64,
}

impl DetailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Summarize the stored airline records.
#[derive(Debug, Parser)]
#[command(name = "summarize")]
pub struct SummaryConfig {
    #[arg(long, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[arg(long, default_value = SUMMARY_FILE)]
    pub out: PathBuf,

    /// Every stored record combined into one array
    #[arg(long, default_value = DATA_FILE)]
    pub data: PathBuf,
}
