//! Wishlist Store
//!
//! Saved artworks for one session, unique by id and kept in the order they
//! were saved.

use crate::catalog::models::{Artwork, ArtworkId};

#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    items: Vec<Artwork>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a snapshot of `artwork`. Already saved ids are left untouched.
    pub fn add_to_wishlist(&mut self, artwork: &Artwork) {
        if !self.is_in_wishlist(artwork.id) {
            self.items.push(artwork.clone());
        }
    }

    pub fn remove_from_wishlist(&mut self, artwork_id: ArtworkId) {
        self.items.retain(|a| a.id != artwork_id);
    }

    pub fn is_in_wishlist(&self, artwork_id: ArtworkId) -> bool {
        self.items.iter().any(|a| a.id == artwork_id)
    }

    /// Number of distinct saved artworks.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Flips membership and returns whether the artwork is now saved.
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.is_in_wishlist(artwork.id) {
            self.remove_from_wishlist(artwork.id);
            false
        } else {
            self.items.push(artwork.clone());
            true
        }
    }

    pub fn items(&self) -> &[Artwork] {
        &self.items
    }
}
