//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the catalog endpoint, per-query result caps,
//! author expansion, timeouts, page size and the keyword heuristics. The
//! defaults match the public Google Books volume-search API.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;
use crate::heuristics::Heuristics;

/// Default catalog endpoint.
pub const GOOGLE_BOOKS_VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Upstream cap on `maxResults` for a single volume-search request.
const UPSTREAM_MAX_RESULTS: u32 = 40;

/// Configuration for a book search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Deserializes from a partial table,
/// filling missing fields from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Volume-search endpoint of the catalog.
    pub base_url: String,
    /// Optional API key appended as `key=` to each request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Language restriction sent upstream; results in other languages are
    /// also dropped by the literary filter.
    pub language: String,
    /// Print type restriction sent upstream.
    pub print_type: String,
    /// `maxResults` for each of the three base query variants.
    pub max_results_per_query: u32,
    /// `maxResults` for each author-expansion query.
    pub author_max_results: u32,
    /// Upper bound on author-expansion queries per search.
    pub max_author_expansions: usize,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Number of results per page.
    pub page_size: usize,
    /// Minimum similarity ratio for the fuzzy title bonus.
    pub fuzzy_threshold: f64,
    /// Custom User-Agent string. If `None`, a crate-identifying agent is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Keyword sets used by the filter and genre synthesis.
    pub heuristics: Heuristics,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_BOOKS_VOLUMES_URL.to_owned(),
            api_key: None,
            language: "en".to_owned(),
            print_type: "books".to_owned(),
            max_results_per_query: 40,
            author_max_results: 20,
            max_author_expansions: 5,
            timeout_seconds: 8,
            page_size: 12,
            fuzzy_threshold: 0.6,
            user_agent: None,
            heuristics: Heuristics::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute URL
    /// - `language` must not be empty
    /// - both result caps must be in `1..=40`
    /// - `timeout_seconds` and `page_size` must be greater than 0
    /// - `fuzzy_threshold` must be in `(0, 1]`
    pub fn validate(&self) -> Result<(), SearchError> {
        Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        if self.language.trim().is_empty() {
            return Err(SearchError::Config("language must not be empty".into()));
        }
        if !(1..=UPSTREAM_MAX_RESULTS).contains(&self.max_results_per_query) {
            return Err(SearchError::Config(format!(
                "max_results_per_query must be between 1 and {UPSTREAM_MAX_RESULTS}"
            )));
        }
        if !(1..=UPSTREAM_MAX_RESULTS).contains(&self.author_max_results) {
            return Err(SearchError::Config(format!(
                "author_max_results must be between 1 and {UPSTREAM_MAX_RESULTS}"
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if !(self.fuzzy_threshold > 0.0 && self.fuzzy_threshold <= 1.0) {
            return Err(SearchError::Config(
                "fuzzy_threshold must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, GOOGLE_BOOKS_VOLUMES_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.print_type, "books");
        assert_eq!(config.max_results_per_query, 40);
        assert_eq!(config.author_max_results, 20);
        assert_eq!(config.max_author_expansions, 5);
        assert_eq!(config.page_size, 12);
        assert!((config.fuzzy_threshold - 0.6).abs() < f64::EPSILON);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_base_url_rejected() {
        let config = SearchConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn max_results_above_upstream_cap_rejected() {
        let config = SearchConfig {
            max_results_per_query: 41,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results_per_query"));
    }

    #[test]
    fn zero_author_max_results_rejected() {
        let config = SearchConfig {
            author_max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("author_max_results"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_page_size_rejected() {
        let config = SearchConfig {
            page_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for threshold in [0.0, 1.5, f64::NAN] {
            let config = SearchConfig {
                fuzzy_threshold: threshold,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "threshold {threshold} accepted");
        }
    }

    #[test]
    fn empty_language_rejected() {
        let config = SearchConfig {
            language: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_author_expansions_valid() {
        let config = SearchConfig {
            max_author_expansions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_table_fills_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"page_size": 20, "api_key": "k"}"#).expect("deserialize");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.max_results_per_query, 40);
        assert_eq!(config.heuristics, Heuristics::default());
    }
}
