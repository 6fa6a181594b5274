//! Error types for the bookshelf-search crate.
//!
//! Upstream catalog failures are normally absorbed by the fetch stage and
//! never reach the caller; these variants surface only from the catalog
//! client itself, from configuration validation, and from client setup.

/// Errors that can occur while searching the book catalog.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the catalog failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The catalog response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A catalog request exceeded the configured timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for bookshelf-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
