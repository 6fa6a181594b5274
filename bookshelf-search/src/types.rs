//! Core types: requests, raw catalog records and normalised results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// How the filtered results are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Highest relevance score first.
    #[default]
    Relevance,
    /// Newest publication year first.
    Year,
    /// First listed author, alphabetically.
    Author,
}

impl SortMode {
    /// Returns the wire/CLI name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Year => "year",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "year" => Ok(Self::Year),
            "author" => Ok(Self::Author),
            other => Err(SearchError::Config(format!(
                "unknown sort mode `{other}` (use relevance|year|author)"
            ))),
        }
    }
}

/// One search request as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    sort: SortMode,
    page: usize,
}

impl SearchRequest {
    /// Build a request. The query is trimmed and a page of 0 is raised to 1.
    pub fn new(query: &str, sort: SortMode, page: usize) -> Self {
        Self {
            query: query.trim().to_owned(),
            sort,
            page: page.max(1),
        }
    }

    /// The trimmed query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Requested ordering.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// Cover image links of a catalog volume.
///
/// Only `thumbnail` feeds the normalized result; the other sizes
/// (`smallThumbnail`, `small`, `medium`, ...) still count as a cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
    /// Any further image sizes the catalog returned.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl ImageLinks {
    /// Returns `true` if no image link of any size is present.
    pub fn is_empty(&self) -> bool {
        self.thumbnail.is_none() && self.small_thumbnail.is_none() && self.other.is_empty()
    }
}

/// Bibliographic block of a catalog volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub language: Option<String>,
    pub published_date: Option<String>,
    pub image_links: Option<ImageLinks>,
}

/// A volume record exactly as the catalog returned it.
///
/// Every field may be missing; the accessors below define what absence
/// means so the pipeline stages never have to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogItem {
    pub id: Option<String>,
    pub volume_info: Option<VolumeInfo>,
}

impl RawCatalogItem {
    fn info(&self) -> Option<&VolumeInfo> {
        self.volume_info.as_ref()
    }

    /// Catalog id, `None` when absent or empty.
    pub fn catalog_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Title, empty when absent.
    pub fn title(&self) -> &str {
        self.info().and_then(|i| i.title.as_deref()).unwrap_or("")
    }

    /// Author list, empty when absent.
    pub fn authors(&self) -> &[String] {
        self.info()
            .and_then(|i| i.authors.as_deref())
            .unwrap_or(&[])
    }

    /// Authors joined for display: `"A, B"`.
    pub fn authors_joined(&self) -> String {
        self.authors().join(", ")
    }

    /// First listed author, empty when there is none.
    pub fn first_author(&self) -> &str {
        self.authors().first().map(String::as_str).unwrap_or("")
    }

    /// Description, empty when absent.
    pub fn description(&self) -> &str {
        self.info()
            .and_then(|i| i.description.as_deref())
            .unwrap_or("")
    }

    /// Category list, empty when absent.
    pub fn categories(&self) -> &[String] {
        self.info()
            .and_then(|i| i.categories.as_deref())
            .unwrap_or(&[])
    }

    /// Language code, `None` when absent or empty.
    pub fn language(&self) -> Option<&str> {
        self.info()
            .and_then(|i| i.language.as_deref())
            .filter(|lang| !lang.is_empty())
    }

    /// Publication year from a leading 4-digit prefix of `publishedDate`.
    ///
    /// `"1965-08-01"` → `Some(1965)`; `"c. 1965"`, `"65"` or absent → `None`.
    pub fn year(&self) -> Option<i32> {
        let date = self.info()?.published_date.as_deref()?;
        let prefix = date.get(..4)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok()
    }

    /// The `thumbnail` cover URL, `None` when absent or empty.
    pub fn thumbnail(&self) -> Option<&str> {
        self.info()
            .and_then(|i| i.image_links.as_ref())
            .and_then(|links| links.thumbnail.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Returns `true` if the volume carries an `imageLinks` object with at
    /// least one entry, whatever its size names.
    pub fn has_cover(&self) -> bool {
        self.info()
            .and_then(|i| i.image_links.as_ref())
            .is_some_and(|links| !links.is_empty())
    }

    /// Lower-cased `title + " " + description`, the text the keyword
    /// heuristics scan.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title(), self.description()).to_lowercase()
    }
}

/// A book result as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBookResult {
    /// Catalog id, unique within one result list.
    pub id: String,
    pub title: String,
    /// Authors joined with `", "`.
    pub authors: String,
    /// Cover image URL, if the catalog had one.
    pub thumbnail: Option<String>,
    pub description: String,
    /// Four-digit year, or empty when unknown.
    pub year: String,
    /// Sorted labels joined with `", "`, or `"Unknown"`.
    pub genres: String,
}
