//! # bookshelf-search
//!
//! Book catalog search for a personal reading tracker.
//!
//! Given a free-text query and a sort mode, this crate queries an external
//! volume-search API (Google Books by default), drops results that look
//! like academic or technical noise, synthesizes genre labels, ranks the
//! survivors and pages them.
//!
//! ## Design
//!
//! - Three query variants per search, issued concurrently; ambiguous
//!   multi-word titles trigger a second pass expanded by author
//! - Deduplication by catalog id, with variant priority deciding which copy
//!   of a volume is kept
//! - Binary literary filter driven by injectable keyword sets
//! - Additive relevance score with a pluggable fuzzy-similarity metric
//! - Graceful degradation: a failed or slow request contributes nothing,
//!   the others still return results
//!
//! Nothing is cached or persisted; every search starts from scratch.

pub mod catalog;
pub mod catalogs;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod http;
pub mod pipeline;
pub mod types;

pub use catalog::{CatalogClient, CatalogQuery};
pub use catalogs::GoogleBooksClient;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use heuristics::Heuristics;
pub use pipeline::paginate::SearchPage;
pub use pipeline::search::BookSearch;
pub use types::{NormalizedBookResult, RawCatalogItem, SearchRequest, SortMode};

/// Search the Google Books catalog and return one page of results.
///
/// Validates `config`, builds an HTTP catalog client and delegates to
/// [`search_with`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, or
/// [`SearchError::Http`] if the HTTP client cannot be built. Upstream
/// request failures are not errors; they only shrink the result set.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> bookshelf_search::Result<()> {
/// use bookshelf_search::{SearchConfig, SearchRequest, SortMode};
///
/// let request = SearchRequest::new("Dune", SortMode::Relevance, 1);
/// let page = bookshelf_search::search(&request, &SearchConfig::default()).await?;
/// for book in &page.results {
///     println!("{} by {} [{}]", book.title, book.authors, book.genres);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(request: &SearchRequest, config: &SearchConfig) -> Result<SearchPage> {
    config.validate()?;
    let client = GoogleBooksClient::from_config(config)?;
    search_with(&client, request, config).await
}

/// Search an arbitrary catalog and return one page of results.
///
/// An empty query short-circuits to an empty page without touching the
/// catalog.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
pub async fn search_with<C: CatalogClient>(
    client: &C,
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchPage> {
    config.validate()?;
    let search = BookSearch::new(request.query(), request.sort(), config, client);
    let results = search.process().await;
    Ok(SearchPage::from_results(
        request.query(),
        request.sort(),
        &results,
        request.page(),
        config.page_size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnreachableCatalog;

    impl CatalogClient for UnreachableCatalog {
        async fn search_volumes(&self, _query: &CatalogQuery) -> Result<Vec<RawCatalogItem>> {
            Err(SearchError::Http("connection refused".into()))
        }

        fn name(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn search_validates_config_zero_page_size() {
        let config = SearchConfig {
            page_size: 0,
            ..Default::default()
        };
        let request = SearchRequest::new("dune", SortMode::Relevance, 1);
        let result = search(&request, &config).await;
        assert!(result.unwrap_err().to_string().contains("page_size"));
    }

    #[tokio::test]
    async fn search_validates_config_bad_base_url() {
        let config = SearchConfig {
            base_url: "::nope".into(),
            ..Default::default()
        };
        let request = SearchRequest::new("dune", SortMode::Relevance, 1);
        let result = search(&request, &config).await;
        assert!(result.unwrap_err().to_string().contains("base_url"));
    }

    #[tokio::test]
    async fn unreachable_catalog_yields_empty_page() {
        let request = SearchRequest::new("Silent Patient", SortMode::Relevance, 1);
        let page = search_with(&UnreachableCatalog, &request, &SearchConfig::default())
            .await
            .expect("upstream failures are not errors");
        assert_eq!(page.total, 0);
        assert!(page.results.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn empty_query_yields_empty_page() {
        let request = SearchRequest::new("   ", SortMode::Year, 2);
        let page = search_with(&UnreachableCatalog, &request, &SearchConfig::default())
            .await
            .expect("empty query is not an error");
        assert_eq!(page.query, "");
        assert_eq!(page.page, 2);
        assert_eq!(page.sort, SortMode::Year);
        assert!(page.results.is_empty());
    }
}
