//! Trait definition for pluggable book catalog backends.
//!
//! The pipeline only depends on a volume-search contract: a query string
//! plus a result cap in, a list of [`RawCatalogItem`] out. Any catalog
//! exposing that shape can implement [`CatalogClient`].

use std::future::Future;

use crate::error::SearchError;
use crate::types::RawCatalogItem;

/// One volume-search request sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Query text, possibly with `intitle:` style scoped terms.
    pub q: String,
    /// Maximum number of volumes to request.
    pub max_results: u32,
}

impl CatalogQuery {
    pub fn new(q: impl Into<String>, max_results: u32) -> Self {
        Self {
            q: q.into(),
            max_results,
        }
    }
}

/// A pluggable book catalog backend.
///
/// Implementors handle URL construction, the HTTP round trip and response
/// decoding. A response without any volumes is `Ok(vec![])`, not an error.
///
/// All implementations must be `Send + Sync` for concurrent query variants.
pub trait CatalogClient: Send + Sync {
    /// Run one volume search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the catalog answers
    /// with a non-success status, or the body cannot be decoded.
    fn search_volumes(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<Vec<RawCatalogItem>, SearchError>> + Send;

    /// Human-readable catalog name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VolumeInfo;

    /// A mock catalog for testing trait bounds and async execution.
    struct MockCatalog {
        items: Vec<RawCatalogItem>,
    }

    impl CatalogClient for MockCatalog {
        async fn search_volumes(
            &self,
            query: &CatalogQuery,
        ) -> Result<Vec<RawCatalogItem>, SearchError> {
            if self.items.is_empty() {
                return Err(SearchError::Http("mock catalog failure".into()));
            }
            Ok(self
                .items
                .iter()
                .take(query.max_results as usize)
                .cloned()
                .collect())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn item(id: &str) -> RawCatalogItem {
        RawCatalogItem {
            id: Some(id.into()),
            volume_info: Some(VolumeInfo::default()),
        }
    }

    #[test]
    fn mock_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockCatalog>();
    }

    #[test]
    fn query_constructor_keeps_fields() {
        let q = CatalogQuery::new("intitle:dune", 40);
        assert_eq!(q.q, "intitle:dune");
        assert_eq!(q.max_results, 40);
    }

    #[tokio::test]
    async fn mock_catalog_honours_max_results() {
        let catalog = MockCatalog {
            items: vec![item("a"), item("b"), item("c")],
        };
        let items = catalog
            .search_volumes(&CatalogQuery::new("dune", 2))
            .await
            .expect("should succeed");
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn mock_catalog_propagates_errors() {
        let catalog = MockCatalog { items: vec![] };
        let result = catalog.search_volumes(&CatalogQuery::new("dune", 2)).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mock catalog failure"));
    }
}
