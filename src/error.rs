// src/error.rs
use thiserror::Error;

/// Failure of the HTTP collaborator. Never produced by the scraping core itself.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("player not found: {query} (check name, school and years)")]
    NotFound { query: String },

    #[error("no {section} table on the page")]
    SectionUnavailable { section: String },

    #[error("{year} is outside the active years \"{active_years}\"")]
    YearOutOfRange { year: u16, active_years: String },

    #[error("unexpected page layout at {url}: {reason}")]
    MalformedPage { url: String, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ScrapeError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        ScrapeError::MalformedPage { url: s!(url), reason: reason.into() }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
