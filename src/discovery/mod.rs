//! Discovery of candidate images and spec sheets via public search engines.

pub mod search;

/// Error type for search page handling.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid search URL: {0}")]
    Url(String),
}
