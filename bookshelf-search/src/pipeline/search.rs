//! Book search: fetch, filter, rank and normalise for one query.
//!
//! [`BookSearch`] is built per request from the query and sort mode and
//! runs the full pipeline in [`BookSearch::process`]. Paging happens
//! afterwards over the complete list via [`BookSearch::get_page`].

use crate::catalog::CatalogClient;
use crate::config::SearchConfig;
use crate::types::{NormalizedBookResult, RawCatalogItem, SortMode};

use super::fetch::fetch_raw_results;
use super::filter::LiteraryFilter;
use super::genres::extract_genres;
use super::paginate;
use super::scoring::{sort_results, RelevanceScorer};

/// One search over a catalog.
pub struct BookSearch<'a, C> {
    query: String,
    sort: SortMode,
    config: &'a SearchConfig,
    client: &'a C,
}

impl<'a, C: CatalogClient> BookSearch<'a, C> {
    /// The query is trimmed; an empty query yields no results.
    pub fn new(query: &str, sort: SortMode, config: &'a SearchConfig, client: &'a C) -> Self {
        Self {
            query: query.trim().to_owned(),
            sort,
            config,
            client,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Run the pipeline and return every surviving result, ordered.
    ///
    /// # Pipeline
    ///
    /// 1. Fetch query variants (and author expansion) and deduplicate
    /// 2. Drop non-literary volumes
    /// 3. Sort by the requested mode
    /// 4. Normalise, synthesizing genres
    pub async fn process(&self) -> Vec<NormalizedBookResult> {
        if self.query.is_empty() {
            return Vec::new();
        }
        tracing::trace!(query = %self.query, sort = %self.sort, "book search");

        let raw = fetch_raw_results(self.client, &self.query, self.config).await;
        let fetched = raw.len();

        let filter = LiteraryFilter::new(
            &self.query,
            &self.config.heuristics,
            &self.config.language,
        );
        let filtered = filter.filter_results(raw);

        let scorer = RelevanceScorer::new(&self.query, self.config.fuzzy_threshold);
        let sorted = sort_results(filtered, self.sort, &scorer);

        tracing::debug!(
            fetched,
            kept = sorted.len(),
            sort = %self.sort,
            "book search complete"
        );
        sorted.iter().map(|item| self.convert(item)).collect()
    }

    /// Page `page` (1-based) of `results` using the configured page size.
    pub fn get_page<'r>(
        &self,
        results: &'r [NormalizedBookResult],
        page: usize,
    ) -> &'r [NormalizedBookResult] {
        paginate::get_page(results, page, self.config.page_size)
    }

    fn convert(&self, item: &RawCatalogItem) -> NormalizedBookResult {
        NormalizedBookResult {
            id: item.catalog_id().unwrap_or_default().to_owned(),
            title: item.title().to_owned(),
            authors: item.authors_joined(),
            thumbnail: item.thumbnail().map(str::to_owned),
            description: item.description().to_owned(),
            year: item.year().map(|y| format!("{y:04}")).unwrap_or_default(),
            genres: extract_genres(item, &self.config.heuristics),
        }
    }
}
