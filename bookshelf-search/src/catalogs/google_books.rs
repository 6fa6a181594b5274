//! Google Books volume search.
//!
//! `GET /books/v1/volumes?q=..&maxResults=..&printType=..&langRestrict=..`
//! returning `{"items": [volume, ...]}`. A response with no matches omits
//! `items` entirely.

use serde::Deserialize;

use crate::catalog::{CatalogClient, CatalogQuery};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::RawCatalogItem;

/// Top-level volume-search response body. Items stay untyped here so one
/// malformed volume does not discard the rest.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<serde_json::Value>>,
}

/// Client for the Google Books volume-search endpoint (or any service
/// exposing the same query/response contract).
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    language: String,
    print_type: String,
}

impl GoogleBooksClient {
    /// Build a client from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            print_type: config.print_type.clone(),
        })
    }

    fn params(&self, query: &CatalogQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.q.clone()),
            ("maxResults", query.max_results.to_string()),
            ("printType", self.print_type.clone()),
            ("langRestrict", self.language.clone()),
        ];
        if let Some(ref key) = self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

impl CatalogClient for GoogleBooksClient {
    async fn search_volumes(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<RawCatalogItem>, SearchError> {
        tracing::trace!(q = %query.q, max_results = query.max_results, "Google Books search");

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.params(query))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(format!("Google Books request timed out: {e}"))
                } else {
                    SearchError::Http(format!("Google Books request failed: {e}"))
                }
            })?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Google Books HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Google Books response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Google Books response received");

        parse_volumes_json(&body)
    }

    fn name(&self) -> &'static str {
        "Google Books"
    }
}

/// Decode a volume-search response body.
///
/// A body that is not a volumes object is a [`SearchError::Parse`]; a single
/// volume that fails to decode is skipped.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_volumes_json(body: &str) -> Result<Vec<RawCatalogItem>, SearchError> {
    let response: VolumesResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid volumes response: {e}")))?;
    let raw = response.items.unwrap_or_default();
    let total = raw.len();
    let items: Vec<RawCatalogItem> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("skipping malformed volume: {e}");
                None
            }
        })
        .collect();
    tracing::debug!(
        count = items.len(),
        skipped = total - items.len(),
        "Google Books volumes parsed"
    );
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_VOLUMES_JSON: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "B1hSG45JCX4C",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "categories": ["Fiction"],
                    "language": "en",
                    "publishedDate": "1990-09-01",
                    "imageLinks": {"thumbnail": "http://books.google.com/t.jpg"}
                }
            },
            {
                "id": "p_dRDQAAQBAJ",
                "volumeInfo": {"title": "Dune Messiah"}
            }
        ]
    }"#;

    #[test]
    fn parses_items() {
        let items = parse_volumes_json(MOCK_VOLUMES_JSON).expect("should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), "Dune");
        assert_eq!(items[0].catalog_id(), Some("B1hSG45JCX4C"));
        assert_eq!(items[1].title(), "Dune Messiah");
        assert!(items[1].authors().is_empty());
    }

    #[test]
    fn missing_items_is_empty() {
        let items =
            parse_volumes_json(r#"{"kind": "books#volumes", "totalItems": 0}"#).expect("parse");
        assert!(items.is_empty());
    }

    #[test]
    fn null_items_is_empty() {
        let items = parse_volumes_json(r#"{"items": null}"#).expect("parse");
        assert!(items.is_empty());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_volumes_json("<html>quota exceeded</html>").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn malformed_volume_is_skipped() {
        let body = r#"{
            "items": [
                {"id": "bad-date", "volumeInfo": {"title": "Dune", "publishedDate": 1965}},
                {"id": "bad-authors", "volumeInfo": {"title": "Dune", "authors": "Frank Herbert"}},
                {"id": "good", "volumeInfo": {"title": "Dune", "authors": ["Frank Herbert"]}}
            ]
        }"#;
        let items = parse_volumes_json(body).expect("parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].catalog_id(), Some("good"));
    }

    #[test]
    fn non_array_items_is_parse_error() {
        let err = parse_volumes_json(r#"{"items": "nope"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn params_include_restrictions() {
        let client = GoogleBooksClient::from_config(&SearchConfig::default()).expect("client");
        let params = client.params(&CatalogQuery::new("intitle:\"Dune\"", 40));
        assert!(params.contains(&("q", "intitle:\"Dune\"".to_string())));
        assert!(params.contains(&("maxResults", "40".to_string())));
        assert!(params.contains(&("printType", "books".to_string())));
        assert!(params.contains(&("langRestrict", "en".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "key"));
    }

    #[test]
    fn params_include_api_key_when_configured() {
        let config = SearchConfig {
            api_key: Some("secret".into()),
            ..Default::default()
        };
        let client = GoogleBooksClient::from_config(&config).expect("client");
        let params = client.params(&CatalogQuery::new("dune", 20));
        assert!(params.contains(&("key", "secret".to_string())));
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoogleBooksClient>();
    }
}
