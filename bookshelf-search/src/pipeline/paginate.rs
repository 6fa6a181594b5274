//! Fixed-size pagination over the fully ranked result list.

use serde::{Deserialize, Serialize};

use crate::types::{NormalizedBookResult, SortMode};

/// Slice `[(page - 1) * page_size, page * page_size)` of `items`.
///
/// Page numbers are 1-based. Page 0, a zero page size, or a page past the
/// end yield an empty slice.
pub fn get_page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Returns `true` if results remain after `page`.
pub fn has_more(total: usize, page: usize, page_size: usize) -> bool {
    total > page.saturating_mul(page_size)
}

/// One page of search results plus what a caller needs to render paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub query: String,
    pub sort: SortMode,
    pub page: usize,
    pub page_size: usize,
    /// Number of results across all pages.
    pub total: usize,
    pub has_more: bool,
    pub results: Vec<NormalizedBookResult>,
}

impl SearchPage {
    /// Build page `page` from the complete ordered result list.
    pub fn from_results(
        query: &str,
        sort: SortMode,
        results: &[NormalizedBookResult],
        page: usize,
        page_size: usize,
    ) -> Self {
        Self {
            query: query.to_owned(),
            sort,
            page,
            page_size,
            total: results.len(),
            has_more: has_more(results.len(), page, page_size),
            results: get_page(results, page, page_size).to_vec(),
        }
    }
}
