use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolrError>;

/// Backend call failures. Nothing here is retried; every variant is terminal
/// for the request that triggered it.
#[derive(Debug, Error)]
pub enum SolrError {
    #[error("backend call to {url} failed: {source}")]
    Unavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("start record offset {offset} is out of range for {total} matches")]
    OffsetOutOfRange { offset: u64, total: u64 },

    #[error("could not construct backend HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("backend request limiter is closed")]
    LimiterClosed,
}
