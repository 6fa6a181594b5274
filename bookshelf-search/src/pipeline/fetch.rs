//! Query expansion and fetch.
//!
//! Three base variants are sent concurrently: the exact title phrase, the
//! unquoted title and the raw query. When the query looks like an
//! ambiguous multi-word title, a second concurrent pass asks for the same
//! phrase by each of a handful of authors seen in the first pass.
//!
//! A failed or timed-out request contributes nothing; it never aborts the
//! fetch.

use std::collections::HashSet;
use std::time::Duration;

use crate::catalog::{CatalogClient, CatalogQuery};
use crate::config::SearchConfig;
use crate::types::RawCatalogItem;

use super::dedup::{CatalogDedup, RankedBatch};

/// The three base query variants, highest priority first.
pub fn base_variants(query: &str) -> [String; 3] {
    [
        format!("intitle:\"{query}\""),
        format!("intitle:{query}"),
        query.to_owned(),
    ]
}

/// The author-expansion variant for one candidate author.
pub fn author_variant(query: &str, author: &str) -> String {
    format!("\"{query}\" by author:\"{author}\"")
}

/// Returns `true` if `query` is a multi-word title likely to match several
/// unrelated works: at least two tokens, every token longer than three
/// characters, and no purely numeric token.
pub fn is_ambiguous(query: &str) -> bool {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    tokens.len() >= 2
        && tokens.iter().all(|t| t.chars().count() > 3)
        && !tokens.iter().any(|t| t.chars().all(|c| c.is_ascii_digit()))
}

/// Collect multi-word author names from `items`, deduplicated, in
/// first-seen order.
pub fn candidate_authors(items: &[RawCatalogItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.authors())
        .filter(|author| author.split_whitespace().count() >= 2)
        .filter(|author| seen.insert(author.to_string()))
        .cloned()
        .collect()
}

/// Fetch, merge and deduplicate raw volumes for `query`.
///
/// # Pipeline
///
/// 1. Issue the base variants concurrently, tagged with ranks 0..3
/// 2. Merge in rank order into the dedup set
/// 3. If the query is ambiguous, issue up to `max_author_expansions`
///    author variants concurrently, ranked after the base variants
/// 4. Merge newly seen ids
pub async fn fetch_raw_results<C: CatalogClient>(
    client: &C,
    query: &str,
    config: &SearchConfig,
) -> Vec<RawCatalogItem> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let timeout = Duration::from_secs(config.timeout_seconds);

    let base: Vec<CatalogQuery> = base_variants(query)
        .into_iter()
        .map(|q| CatalogQuery::new(q, config.max_results_per_query))
        .collect();
    let base_count = base.len();

    let mut dedup = CatalogDedup::new();
    let added = dedup.merge_ranked(run_ranked(client, base, 0, timeout).await);
    tracing::debug!(added, "base query variants merged");

    if is_ambiguous(query) && config.max_author_expansions > 0 {
        let authors: Vec<String> = candidate_authors(dedup.items())
            .into_iter()
            .take(config.max_author_expansions)
            .collect();
        tracing::debug!(authors = authors.len(), "ambiguous title, expanding by author");

        let expansion: Vec<CatalogQuery> = authors
            .iter()
            .map(|author| {
                CatalogQuery::new(author_variant(query, author), config.author_max_results)
            })
            .collect();
        let batches = run_ranked(client, expansion, base_count, timeout).await;
        let added = dedup.merge_ranked(batches);
        tracing::debug!(added, "author expansion merged");
    }

    dedup.into_items()
}

/// Run `queries` concurrently, tagging each outcome with
/// `first_rank + position`.
async fn run_ranked<C: CatalogClient>(
    client: &C,
    queries: Vec<CatalogQuery>,
    first_rank: usize,
    timeout: Duration,
) -> Vec<RankedBatch> {
    let futures: Vec<_> = queries
        .iter()
        .enumerate()
        .map(|(offset, query)| async move {
            let items = query_catalog(client, query, timeout).await;
            RankedBatch {
                rank: first_rank + offset,
                items,
            }
        })
        .collect();

    futures::future::join_all(futures).await
}

/// Query the catalog once, degrading any failure to an empty list.
async fn query_catalog<C: CatalogClient>(
    client: &C,
    query: &CatalogQuery,
    timeout: Duration,
) -> Vec<RawCatalogItem> {
    match tokio::time::timeout(timeout, client.search_volumes(query)).await {
        Ok(Ok(items)) => {
            tracing::debug!(
                catalog = client.name(),
                count = items.len(),
                "catalog returned volumes"
            );
            items
        }
        Ok(Err(err)) => {
            tracing::warn!(catalog = client.name(), error = %err, "catalog query failed");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(
                catalog = client.name(),
                timeout_secs = timeout.as_secs(),
                "catalog query timed out"
            );
            Vec::new()
        }
    }
}
