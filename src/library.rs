//! Importing catalog search results into the personal library.

use std::fmt;
use std::str::FromStr;

use bookshelf_search::NormalizedBookResult;
use serde::{Deserialize, Serialize};

use crate::error::BookshelfError;

/// Where a book sits on the shelf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "reading")]
    Reading,
    #[default]
    #[serde(rename = "to-read")]
    ToRead,
}

impl ReadingStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Reading => "reading",
            Self::ToRead => "to-read",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "reading" => Ok(Self::Reading),
            "to-read" | "to_read" => Ok(Self::ToRead),
            other => Err(BookshelfError::Library(format!(
                "unknown reading status `{other}` (use read|reading|to-read)"
            ))),
        }
    }
}

/// A book ready to be stored in the library, built from a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: Option<String>,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub status: ReadingStatus,
    /// Catalog volume id the book was imported from.
    pub catalog_id: String,
}

impl NewBook {
    /// Build a library record from a normalized search result.
    ///
    /// Empty author and description strings become `None`.
    pub fn from_result(result: &NormalizedBookResult, status: ReadingStatus) -> Self {
        Self {
            title: result.title.clone(),
            author: non_empty(&result.authors),
            cover_url: result.thumbnail.clone(),
            description: non_empty(&result.description),
            status,
            catalog_id: result.id.clone(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
