//! Catalog backend implementations.
//!
//! Each module provides a struct implementing [`crate::catalog::CatalogClient`]
//! against a specific catalog API.

pub mod google_books;

pub use google_books::GoogleBooksClient;
