#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Timeout while loading {url}")]
    Timeout { url: String },

    #[error("Timeout waiting for selector `{selector}`")]
    SelectorTimeout { selector: &'static str },

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CrawlerError {
    /// Navigation and selector waits that ran out of time.
    pub fn is_timeout(&self) -> bool {
        match self {
            CrawlerError::Timeout { .. } | CrawlerError::SelectorTimeout { .. } => true,
            CrawlerError::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }
}
