use indicatif::ProgressBar;
use tokio::time::Duration;
use tracing::{debug, error, info, warn};

pub mod airlines;
pub mod config;
pub mod output;
pub mod page;
pub mod store;
pub mod summary;

mod error;
mod utils;

pub use airlines::{Aircraft, AirlineRecord, AirlineRef};
pub use error::CrawlerError;
pub use utils::{init_tracing, sanitize_file_name};

/// Loads pages. One instance is reused for the whole run.
#[async_trait::async_trait]
pub trait Page: Send + Sync {
    /// Navigate to `url` and return the loaded document's html.
    async fn goto(&self, url: &str) -> Result<String, CrawlerError>;
}

/// Completion ledger keyed by airline name.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    type Record: Send + Sync;

    async fn is_done(&self, name: &str) -> Result<bool, CrawlerError>;
    async fn insert(&self, record: &Self::Record) -> Result<(), CrawlerError>;
}

/// Terminal state of one airline within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Saved,
    TimedOut,
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub skipped: u32,
    pub saved: u32,
    pub timed_out: u32,
    pub failed: u32,
}

impl RunStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Saved => self.saved += 1,
            Outcome::TimedOut => self.timed_out += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

pub struct DetailScraper<P, S> {
    page: P,
    storage: S,
    origin: String,
    delay: Duration,
}

impl<P, S> DetailScraper<P, S>
where
    P: Page,
    S: Storage<Record = AirlineRecord>,
{
    pub fn new(page: P, storage: S, origin: &str, delay: Duration) -> DetailScraper<P, S> {
        DetailScraper {
            page,
            storage,
            origin: origin.to_string(),
            delay,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Process every airline in order. Failures are logged and never stop
    /// the run; airlines without a stored record are retried next run.
    pub async fn run(&self, airlines: &[AirlineRef], progress: &ProgressBar) -> RunStats {
        let mut stats = RunStats::default();
        info!("Airlines to visit: {}", airlines.len());

        for airline in airlines {
            let outcome = self.process(airline).await;
            stats.record(outcome);
            progress.inc(1);
        }

        info!(
            "Done: {} saved, {} skipped, {} timed out, {} failed",
            stats.saved, stats.skipped, stats.timed_out, stats.failed
        );
        stats
    }

    pub async fn process(&self, airline: &AirlineRef) -> Outcome {
        match self.storage.is_done(&airline.name).await {
            Ok(true) => {
                debug!("Skip {}", airline.name);
                return Outcome::Skipped;
            }
            Ok(false) => {}
            Err(e) => {
                error!("Error {}: {}", airline.name, e);
                return Outcome::Failed;
            }
        }

        match self.scrape(airline).await {
            Ok(()) => {
                tokio::time::sleep(self.delay).await;
                Outcome::Saved
            }
            Err(e) if e.is_timeout() => {
                warn!("Timeout: {}", airline.name);
                Outcome::TimedOut
            }
            Err(e) => {
                error!("Error {}: {}", airline.name, e);
                Outcome::Failed
            }
        }
    }

    async fn scrape(&self, airline: &AirlineRef) -> Result<(), CrawlerError> {
        let html = self.page.goto(&airline.url).await?;
        let record = airlines::detail::parse_airline(&html, airline, &self.origin)?;
        self.storage.insert(&record).await?;
        debug!("Insert {} ({} aircraft)", record.name, record.aircraft.len());
        Ok(())
    }
}
