//! Keyword sets driving the literary filter and genre synthesis.
//!
//! [`Heuristics`] is plain configuration data: it is built once (from
//! defaults or a config file) and handed to the filter and the genre
//! extractor, which never mutate it.

use serde::{Deserialize, Serialize};

/// Words whose presence marks a result as academic or technical noise.
const BANNED: &[&str] = &[
    "geology",
    "sediment",
    "ecology",
    "vegetation",
    "analysis",
    "report",
    "basin",
    "reservoir",
    "gas",
    "management",
    "erosion",
    "university",
    "survey",
    "research",
    "study",
];

/// Category fragments that vouch for a result being fiction.
const LITERARY_CLUES: &[&str] = &[
    "fiction",
    "fantasy",
    "novel",
    "science fiction",
    "sci-fi",
    "epic",
    "adventure",
    "romance",
    "thriller",
    "space",
    "galactic",
    "hero",
    "saga",
    "chronicles",
    "series",
];

/// Keyword → genre label pairs scanned in title and description.
const GENRE_KEYWORDS: &[(&str, &str)] = &[
    ("fantasy", "Fantasy"),
    ("epic", "Epic"),
    ("science fiction", "Science Fiction"),
    ("sci-fi", "Science Fiction"),
    ("space", "Science Fiction"),
    ("galactic", "Science Fiction"),
    ("magic", "Fantasy"),
    ("hero", "Fantasy"),
    ("adventure", "Adventure"),
    ("dystopian", "Dystopian"),
];

/// A single keyword → label mapping used during genre synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRule {
    /// Lower-case fragment searched for in title and description.
    pub keyword: String,
    /// Label added to the genre set when the keyword is present.
    pub label: String,
}

/// Immutable keyword sets shared by the filter and enrichment stages.
///
/// All keywords are expected in lower case; they are matched against
/// lower-cased text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Substrings that reject a result and are stripped from its categories.
    pub banned: Vec<String>,
    /// Category substrings that accept a result as literary.
    pub literary_clues: Vec<String>,
    /// Keyword → label rules for synthetic genres.
    pub genre_keywords: Vec<GenreRule>,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            banned: BANNED.iter().map(|s| (*s).to_owned()).collect(),
            literary_clues: LITERARY_CLUES.iter().map(|s| (*s).to_owned()).collect(),
            genre_keywords: GENRE_KEYWORDS
                .iter()
                .map(|(keyword, label)| GenreRule {
                    keyword: (*keyword).to_owned(),
                    label: (*label).to_owned(),
                })
                .collect(),
        }
    }
}

impl Heuristics {
    /// Returns the first banned keyword contained in `text`, if any.
    ///
    /// `text` must already be lower-cased.
    pub fn banned_hit(&self, text: &str) -> Option<&str> {
        self.banned
            .iter()
            .find(|word| text.contains(word.as_str()))
            .map(String::as_str)
    }

    /// Returns `true` if `category` equals a banned keyword, ignoring case.
    pub fn is_banned_category(&self, category: &str) -> bool {
        let lowered = category.to_lowercase();
        self.banned.iter().any(|word| *word == lowered)
    }

    /// Returns `true` if the lower-cased `category` contains a literary clue.
    pub fn has_literary_clue(&self, category: &str) -> bool {
        let lowered = category.to_lowercase();
        self.literary_clues
            .iter()
            .any(|clue| lowered.contains(clue.as_str()))
    }
}
