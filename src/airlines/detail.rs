use super::{inner_text, Aircraft, AirlineRecord, AirlineRef};
use crate::{page, CrawlerError};
use itertools::Itertools;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

const E: &str = "Invalid selector";
const HEADING_SELECTOR: &str = "h1";
lazy_static! {
    static ref HEADING: Selector = Selector::parse(HEADING_SELECTOR).expect(E);
    static ref SEATMAP_LINK: Selector = Selector::parse(r#"a[href*="/seatmap/"]"#).expect(E);
}

/// Seatmap links in document order, one per href.
///
/// Links without visible text are dropped before deduplication, so they
/// never shadow a later link to the same seatmap.
pub fn extract_aircraft(doc: &Html, origin: &str) -> Vec<Aircraft> {
    doc.select(&SEATMAP_LINK)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let name = inner_text(a);
            (!name.is_empty()).then_some((href, name))
        })
        .unique_by(|(href, _)| *href)
        .map(|(href, name)| Aircraft {
            aircraft_name: name,
            seatmap_url: format!("{}{}", origin, href),
        })
        .collect()
}

pub fn parse_airline(
    html: &str,
    airline: &AirlineRef,
    origin: &str,
) -> Result<AirlineRecord, CrawlerError> {
    let doc = Html::parse_document(html);
    let heading = page::wait_for_selector(&doc, &HEADING, HEADING_SELECTOR)?;

    Ok(AirlineRecord {
        name: airline.name.clone(),
        url: airline.url.clone(),
        display_name: inner_text(heading),
        aircraft: extract_aircraft(&doc, origin),
    })
}
