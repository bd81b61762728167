use crate::airlines::AirlineRecord;
use crate::store::JsonDirStore;
use crate::{utils, CrawlerError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineSummary {
    pub name: String,
    pub code: Option<String>,
    pub aircraft_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_airlines: usize,
    pub total_aircraft: usize,
    pub scraped_at: String,
    pub airlines: Vec<AirlineSummary>,
}

/// Path segment after `/airlines/` in an airline page url.
pub fn airline_code(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/airlines/")?;
    let code = rest.split('/').next()?.trim();
    (!code.is_empty()).then(|| code.to_string())
}

impl Summary {
    pub fn from_records(records: &[AirlineRecord], scraped_at: String) -> Summary {
        let mut airlines = records
            .iter()
            .map(|r| AirlineSummary {
                name: r.name.clone(),
                code: airline_code(&r.url),
                aircraft_count: r.aircraft.len(),
            })
            .collect::<Vec<_>>();
        airlines.sort_by(|a, b| a.name.cmp(&b.name));

        Summary {
            total_airlines: airlines.len(),
            total_aircraft: airlines.iter().map(|a| a.aircraft_count).sum(),
            scraped_at,
            airlines,
        }
    }
}

/// Every readable record in the store, in file name order.
pub async fn load_records(store: &JsonDirStore) -> Result<Vec<AirlineRecord>, CrawlerError> {
    let mut records = vec![];
    for (path, record) in store.records().await? {
        match record {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skip {}: {}", path.display(), e),
        }
    }
    Ok(records)
}

pub async fn summarize(
    store: &JsonDirStore,
) -> Result<(Summary, Vec<AirlineRecord>), CrawlerError> {
    let records = load_records(store).await?;
    let summary = Summary::from_records(&records, utils::get_now());
    info!(
        "Summarized {} airlines with {} aircraft",
        summary.total_airlines, summary.total_aircraft
    );
    Ok((summary, records))
}
