//! Search pipeline: fetch, literary filter, enrichment, ranking, pagination.
//!
//! This module fans out query variants to the catalog concurrently,
//! deduplicates volumes by catalog id with variant priority, drops
//! non-literary noise, synthesizes genres, orders the survivors and
//! slices them into pages.

pub mod dedup;
pub mod fetch;
pub mod filter;
pub mod genres;
pub mod paginate;
pub mod scoring;
pub mod search;
