//! Wishlist request and response models

use super::store::WishlistStore;
use crate::catalog::models::{ArtworkId, ArtworkView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveItemInput {
    pub artwork_id: ArtworkId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub items: Vec<ArtworkView>,
    pub item_count: usize,
}

impl From<&WishlistStore> for WishlistView {
    fn from(wishlist: &WishlistStore) -> Self {
        Self {
            items: wishlist.items().iter().map(ArtworkView::from).collect(),
            item_count: wishlist.item_count(),
        }
    }
}

/// Result of the heart button
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub artwork_id: ArtworkId,
    pub in_wishlist: bool,
    pub item_count: usize,
}
