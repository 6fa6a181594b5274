//! Literary filter: keep fiction and general-interest volumes, drop
//! academic and technical noise.
//!
//! The decision is binary and per item. Rules are evaluated in order and
//! the first one that fires decides:
//!
//! 1. reject a known non-English language
//! 2. reject a publication year before 1900
//! 3. reject a banned keyword in title or description
//! 4. accept when nearly every significant query token is in the title
//! 5. accept a multi-token query matching an author
//! 6. accept a category carrying a literary clue
//! 7. otherwise accept only volumes with a cover image

use crate::heuristics::Heuristics;
use crate::types::RawCatalogItem;

/// Volumes published before this year are rejected.
pub const MIN_YEAR: i32 = 1900;

/// Shortest query token, in characters, that the title and author rules count.
const SIGNIFICANT_TOKEN_MIN_LEN: usize = 4;

/// Lower-cased whitespace tokens of `query` longer than three characters.
pub fn significant_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() >= SIGNIFICANT_TOKEN_MIN_LEN)
        .map(str::to_owned)
        .collect()
}

/// Outcome of the literary filter for one volume, naming the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    RejectLanguage,
    RejectYear,
    RejectBannedKeyword,
    AcceptTitle,
    AcceptAuthor,
    AcceptCategory,
    AcceptCover,
    RejectNoCover,
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(
            self,
            Self::AcceptTitle | Self::AcceptAuthor | Self::AcceptCategory | Self::AcceptCover
        )
    }
}

/// The literary filter for one query.
#[derive(Debug, Clone)]
pub struct LiteraryFilter<'a> {
    heuristics: &'a Heuristics,
    language: &'a str,
    tokens: Vec<String>,
}

impl<'a> LiteraryFilter<'a> {
    /// Build a filter for `query` using the given keyword sets. Volumes
    /// whose language is present and differs from `language` are rejected.
    pub fn new(query: &str, heuristics: &'a Heuristics, language: &'a str) -> Self {
        Self {
            heuristics,
            language,
            tokens: significant_tokens(query),
        }
    }

    /// Decide whether `item` is literary and which rule said so.
    pub fn decide(&self, item: &RawCatalogItem) -> Decision {
        if let Some(lang) = item.language() {
            if !lang.eq_ignore_ascii_case(self.language) {
                return Decision::RejectLanguage;
            }
        }

        if item.year().is_some_and(|year| year < MIN_YEAR) {
            return Decision::RejectYear;
        }

        if self.heuristics.banned_hit(&item.searchable_text()).is_some() {
            return Decision::RejectBannedKeyword;
        }

        let title = item.title().to_lowercase();
        let title_hits = self
            .tokens
            .iter()
            .filter(|t| title.contains(t.as_str()))
            .count();
        // Tolerates one stray token such as a subtitle or series word.
        if title_hits >= std::cmp::max(2, self.tokens.len().saturating_sub(1)) {
            return Decision::AcceptTitle;
        }

        if self.tokens.len() >= 2 {
            let authors = item.authors_joined().to_lowercase();
            if self.tokens.iter().any(|t| authors.contains(t.as_str())) {
                return Decision::AcceptAuthor;
            }
        }

        if item
            .categories()
            .iter()
            .any(|c| self.heuristics.has_literary_clue(c))
        {
            return Decision::AcceptCategory;
        }

        if item.has_cover() {
            Decision::AcceptCover
        } else {
            Decision::RejectNoCover
        }
    }

    pub fn is_literary(&self, item: &RawCatalogItem) -> bool {
        self.decide(item).is_accept()
    }

    /// Keep only literary volumes, preserving order.
    pub fn filter_results(&self, items: Vec<RawCatalogItem>) -> Vec<RawCatalogItem> {
        let before = items.len();
        let kept: Vec<RawCatalogItem> = items
            .into_iter()
            .filter(|item| {
                let decision = self.decide(item);
                tracing::trace!(title = item.title(), ?decision, "literary filter");
                decision.is_accept()
            })
            .collect();
        tracing::debug!(before, after = kept.len(), "literary filter applied");
        kept
    }
}
