use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Non-2xx response. `body` is `None` when it could not be read.
    #[error("HTTP {status}")]
    Status {
        status: StatusCode,
        body: Option<String>,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `"<code> - <reason>"`, e.g. `"500 - Internal Server Error"`.
#[must_use]
pub fn status_line(status: StatusCode) -> String {
    format!(
        "{} - {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

pub type Result<T> = std::result::Result<T, Error>;
