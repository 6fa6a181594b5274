//! Relevance scoring and result ordering.
//!
//! Relevance is a sum of independent bonuses, with `T` the lower-cased
//! title, `A` the lower-cased joined authors and `Q` the lower-cased query:
//!
//! ```text
//! +10  T == Q
//!  +6  Q is a substring of T
//!  +5  Q is a substring of A
//!  +3  similarity(Q, T) >= threshold
//!  +2  for each whitespace token of Q found in T
//! ```
//!
//! Bonuses stack: an exact title also counts as a substring and a fuzzy
//! match.
//!
//! Every sort mode breaks ties on the lower-cased title, and the sort is
//! stable beyond that.

use crate::types::{RawCatalogItem, SortMode};

const EXACT_TITLE_BONUS: u32 = 10;
const TITLE_CONTAINS_BONUS: u32 = 6;
const AUTHOR_CONTAINS_BONUS: u32 = 5;
const FUZZY_TITLE_BONUS: u32 = 3;
const TOKEN_IN_TITLE_BONUS: u32 = 2;

/// A string similarity metric returning a ratio in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Character-level sequence-similarity ratio `2·M / (|a| + |b|)`, where
/// `M` is the number of characters in matching blocks. Two empty strings
/// are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl Similarity for SequenceRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        f64::from(similar::TextDiff::from_chars(a, b).ratio())
    }
}

/// Scores volumes against one query.
#[derive(Debug, Clone)]
pub struct RelevanceScorer<S = SequenceRatio> {
    query: String,
    tokens: Vec<String>,
    threshold: f64,
    similarity: S,
}

impl RelevanceScorer<SequenceRatio> {
    pub fn new(query: &str, threshold: f64) -> Self {
        Self::with_similarity(query, threshold, SequenceRatio)
    }
}

impl<S: Similarity> RelevanceScorer<S> {
    /// Build a scorer using a custom similarity metric.
    pub fn with_similarity(query: &str, threshold: f64, similarity: S) -> Self {
        let query = query.trim().to_lowercase();
        let tokens = query.split_whitespace().map(str::to_owned).collect();
        Self {
            query,
            tokens,
            threshold,
            similarity,
        }
    }

    /// Score a title/author pair.
    pub fn score_parts(&self, title: &str, authors: &str) -> u32 {
        let title = title.to_lowercase();
        let authors = authors.to_lowercase();
        let q = self.query.as_str();

        let mut score = 0;
        if title == q {
            score += EXACT_TITLE_BONUS;
        }
        if title.contains(q) {
            score += TITLE_CONTAINS_BONUS;
        }
        if authors.contains(q) {
            score += AUTHOR_CONTAINS_BONUS;
        }
        if self.similarity.ratio(q, &title) >= self.threshold {
            score += FUZZY_TITLE_BONUS;
        }
        let token_hits = self
            .tokens
            .iter()
            .filter(|t| title.contains(t.as_str()))
            .count() as u32;
        score + token_hits * TOKEN_IN_TITLE_BONUS
    }

    pub fn score(&self, item: &RawCatalogItem) -> u32 {
        self.score_parts(item.title(), &item.authors_joined())
    }
}

/// Composite sort key; every key in one sort uses the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Numeric(i64, String),
    Text(String, String),
}

fn sort_key<S: Similarity>(
    item: &RawCatalogItem,
    mode: SortMode,
    scorer: &RelevanceScorer<S>,
) -> SortKey {
    let title = item.title().to_lowercase();
    match mode {
        SortMode::Year => SortKey::Numeric(-i64::from(item.year().unwrap_or(0)), title),
        SortMode::Author => SortKey::Text(item.first_author().to_lowercase(), title),
        SortMode::Relevance => SortKey::Numeric(-i64::from(scorer.score(item)), title),
    }
}

/// Order `items` by `mode`. Stable: equal keys keep their input order.
pub fn sort_results<S: Similarity>(
    items: Vec<RawCatalogItem>,
    mode: SortMode,
    scorer: &RelevanceScorer<S>,
) -> Vec<RawCatalogItem> {
    let mut keyed: Vec<(SortKey, RawCatalogItem)> = items
        .into_iter()
        .map(|item| (sort_key(&item, mode, scorer), item))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}
