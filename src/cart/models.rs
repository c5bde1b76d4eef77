//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use super::store::CartStore;
use crate::catalog::models::{Artwork, ArtworkId, ArtworkView};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One artwork in the cart with its quantity (always at least 1)
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Snapshot of the artwork taken on first add
    pub artwork: Artwork,

    pub quantity: u32,
}

impl CartLine {
    /// Effective unit price times quantity, capped at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.artwork
            .effective_price()
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// Input for adding one unit of an artwork to the cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub artwork_id: ArtworkId,
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub artwork: ArtworkView,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Cart contents plus the figures the header and checkout need
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub item_count: u32,
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|l| CartLineView {
                    artwork: ArtworkView::from(&l.artwork),
                    quantity: l.quantity,
                    line_total: l.line_total(),
                })
                .collect(),
            total: cart.cart_total(),
            item_count: cart.item_count(),
        }
    }
}

/// Response for the checkout hand-off
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// `checked_out` or `empty`
    pub status: String,

    /// Hosted checkout page to continue on
    pub checkout_url: String,

    pub total: Decimal,

    pub item_count: u32,

    /// One-line summary, e.g. `"2x Golden Sun, 1x Violet Night"`
    pub summary: String,
}
