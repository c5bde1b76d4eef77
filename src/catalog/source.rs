//! Catalog source boundary
//!
//! Consumers only need identity lookups and a full listing; where the
//! records come from is up to the implementation.

use super::models::{Artwork, ArtworkId};
use super::query::CatalogQuery;
use dashmap::DashMap;
use std::sync::atomic::AtomicU64;

pub trait CatalogSource: Send + Sync {
    /// Every artwork, in no particular order.
    fn list(&self) -> Vec<Artwork>;

    fn get(&self, id: ArtworkId) -> Option<Artwork>;

    fn contains(&self, id: ArtworkId) -> bool {
        self.get(id).is_some()
    }

    /// Filtered and sorted listing for the shop page.
    fn query(&self, query: &CatalogQuery) -> Vec<Artwork> {
        query.apply(self.list())
    }
}

/// Local catalog held in memory for the lifetime of the process.
pub struct InMemoryCatalog {
    pub(super) entries: DashMap<ArtworkId, Artwork>,

    /// Highest id handed out so far; see `InMemoryCatalog::next_id`.
    pub(super) last_id: AtomicU64,
}

impl InMemoryCatalog {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        let last_id = artworks.iter().map(|a| a.id).max().unwrap_or(0);
        let entries = artworks.into_iter().map(|a| (a.id, a)).collect();

        Self {
            entries,
            last_id: AtomicU64::new(last_id),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn list(&self) -> Vec<Artwork> {
        self.entries.iter().map(|e| e.value().clone()).collect()
    }

    fn get(&self, id: ArtworkId) -> Option<Artwork> {
        self.entries.get(&id).map(|e| e.value().clone())
    }
}
