//! Result deduplication by catalog id.
//!
//! Every query variant is tagged with a priority rank before it is issued.
//! Batches are merged in rank order, so the first-seen copy of a volume is
//! always the one from the highest-priority variant, whatever order the
//! concurrent requests completed in.

use std::collections::HashSet;

use crate::types::RawCatalogItem;

/// Volumes returned by one query variant, tagged with its priority.
#[derive(Debug, Clone)]
pub struct RankedBatch {
    /// Lower ranks win ties. Base variants use 0..3, author expansion follows.
    pub rank: usize,
    pub items: Vec<RawCatalogItem>,
}

/// Ordered, id-unique list of volumes for one fetch operation.
#[derive(Debug, Default)]
pub struct CatalogDedup {
    seen: HashSet<String>,
    items: Vec<RawCatalogItem>,
}

impl CatalogDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless its id was already seen.
    ///
    /// Items without an id are dropped. Returns `true` if the item was kept.
    pub fn push(&mut self, item: RawCatalogItem) -> bool {
        let Some(id) = item.catalog_id() else {
            return false;
        };
        if !self.seen.insert(id.to_owned()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Merge batches in rank order. Returns how many new items were kept.
    pub fn merge_ranked(&mut self, mut batches: Vec<RankedBatch>) -> usize {
        batches.sort_by_key(|batch| batch.rank);
        let mut added = 0;
        for batch in batches {
            for item in batch.items {
                if self.push(item) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Returns `true` if a volume with this id has been kept.
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kept volumes in first-seen order.
    pub fn items(&self) -> &[RawCatalogItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<RawCatalogItem> {
        self.items
    }
}
