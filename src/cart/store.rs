//! Shopping Cart Store
//!
//! One cart per session. Lines are kept in the order artworks were first
//! added, with at most one line per artwork id.

use super::models::CartLine;
use crate::catalog::models::{Artwork, ArtworkId};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `artwork`, creating its line on first add.
    ///
    /// Availability is not checked here; callers guard on it. A repeat add
    /// keeps the snapshot taken when the line was created.
    pub fn add_to_cart(&mut self, artwork: &Artwork) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.artwork.id == artwork.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                artwork: artwork.clone(),
                quantity: 1,
            });
        }
    }

    /// Removes one unit; the line disappears when its last unit goes.
    /// Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, artwork_id: ArtworkId) {
        let Some(pos) = self.lines.iter().position(|l| l.artwork.id == artwork_id) else {
            return;
        };

        if self.lines[pos].quantity > 1 {
            self.lines[pos].quantity -= 1;
        } else {
            self.lines.remove(pos);
        }
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// Sum of effective unit price times quantity over all lines.
    ///
    /// Catalog prices are bounded by `MAX_PRICE`, so the cap at
    /// `Decimal::MAX` is only reached by artworks built outside the catalog.
    pub fn cart_total(&self) -> Decimal {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total()))
            .unwrap_or(Decimal::MAX)
    }

    /// Total units in the cart, not distinct lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, artwork_id: ArtworkId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.artwork.id == artwork_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
