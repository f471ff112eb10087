use std::fmt;

use async_trait::async_trait;

use super::types::Country;

/// Errors that can occur while talking to a country data source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON array of countries.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Where the controller gets its countries from.
///
/// `search_by_name` returns an empty list when nothing matches; a "not found"
/// answer from the backend is not an error.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the complete dataset.
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;

    /// Fetches the countries whose name matches `query`.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Country>, SourceError>;
}
