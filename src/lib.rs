//! Bookshelf: a personal reading tracker.
//!
//! This crate wires the [`bookshelf_search`] catalog pipeline into the
//! application:
//! - **Config**: TOML file with a `[search]` table and env overrides
//! - **Library import**: turns a chosen search result into a [`NewBook`]
//!
//! The `bookshelf-search` binary runs a single search from the terminal.

pub mod config;
pub mod error;
pub mod library;

pub use bookshelf_search::{NormalizedBookResult, SearchPage, SearchRequest, SortMode};
pub use config::BookshelfConfig;
pub use error::{BookshelfError, Result};
pub use library::{NewBook, ReadingStatus};

/// Run one catalog search with the application configuration.
///
/// # Errors
///
/// Returns [`BookshelfError::Search`] if the search configuration is invalid
/// or the HTTP client cannot be built.
pub async fn search(config: &BookshelfConfig, request: &SearchRequest) -> Result<SearchPage> {
    Ok(bookshelf_search::search(request, &config.search).await?)
}

/// Render a result page as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`BookshelfError::Json`] if serialization fails.
pub fn render_json(page: &SearchPage) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}
