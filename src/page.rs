use crate::{CrawlerError, Page};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use scraper::{ElementRef, Html, Selector};
use tokio::time::Duration;
use tracing::debug;

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// A single reusable page session backed by one http client.
#[derive(Debug, Clone)]
pub struct HttpPage {
    client: reqwest::Client,
}

impl HttpPage {
    pub fn new(timeout: Duration) -> Result<HttpPage, CrawlerError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(HttpPage { client })
    }
}

fn classify(url: &str, e: reqwest::Error) -> CrawlerError {
    if e.is_timeout() {
        CrawlerError::Timeout {
            url: url.to_string(),
        }
    } else {
        CrawlerError::HttpError(e)
    }
}

#[async_trait::async_trait]
impl Page for HttpPage {
    async fn goto(&self, url: &str) -> Result<String, CrawlerError> {
        debug!("Visit {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify(url, e))
    }
}

/// First element matching `selector`. A loaded document never grows, so an
/// absent element is reported the same way an expired selector wait is.
pub fn wait_for_selector<'a>(
    doc: &'a Html,
    selector: &Selector,
    name: &'static str,
) -> Result<ElementRef<'a>, CrawlerError> {
    doc.select(selector)
        .next()
        .ok_or(CrawlerError::SelectorTimeout { selector: name })
}
