//! Error types for the bookshelf application.

/// Top-level error type for the reading tracker.
#[derive(Debug, thiserror::Error)]
pub enum BookshelfError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Catalog search error.
    #[error("search error: {0}")]
    Search(#[from] bookshelf_search::SearchError),

    /// Invalid library record or status.
    #[error("library error: {0}")]
    Library(String),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, BookshelfError>;
