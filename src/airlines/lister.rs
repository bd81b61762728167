use super::{inner_text, AirlineRef};
use crate::{page, CrawlerError, Page};
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

const E: &str = "Invalid selector";
const LIST_ANCHOR_SELECTOR: &str = "li a";
lazy_static! {
    static ref LIST_ANCHOR: Selector = Selector::parse(LIST_ANCHOR_SELECTOR).expect(E);
}

/// Everything read from the airline directory page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Directory {
    pub names: Vec<String>,
    pub refs: Vec<AirlineRef>,
}

/// Names of every list entry link, in document order. Duplicates are kept.
pub fn extract_airline_names(doc: &Html) -> Vec<String> {
    doc.select(&LIST_ANCHOR)
        .map(inner_text)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Name and absolute url of every list entry link that has an href.
pub fn extract_airline_refs(doc: &Html, base: &Url) -> Vec<AirlineRef> {
    doc.select(&LIST_ANCHOR)
        .filter_map(|a| {
            let name = inner_text(a);
            let href = a.value().attr("href").map(str::trim)?;
            if name.is_empty() || href.is_empty() || href.starts_with('#') {
                return None;
            }
            match base.join(href) {
                Ok(url) => Some(AirlineRef {
                    name,
                    url: url.to_string(),
                }),
                Err(e) => {
                    debug!("Skip {} ({}): {}", name, href, e);
                    None
                }
            }
        })
        .collect()
}

pub fn parse_directory(html: &str, base: &Url) -> Result<Directory, CrawlerError> {
    let doc = Html::parse_document(html);
    page::wait_for_selector(&doc, &LIST_ANCHOR, LIST_ANCHOR_SELECTOR)?;

    Ok(Directory {
        names: extract_airline_names(&doc),
        refs: extract_airline_refs(&doc, base),
    })
}

/// Load the directory page and read it. Any failure aborts the listing.
pub async fn list_airlines<P: Page>(page: &P, url: &Url) -> Result<Directory, CrawlerError> {
    let html = page.goto(url.as_str()).await?;
    let directory = parse_directory(&html, url)?;
    info!("Found {} airlines", directory.names.len());
    Ok(directory)
}
