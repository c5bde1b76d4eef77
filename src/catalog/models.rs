//! Catalog Domain Models
//!
//! This module contains the artwork record and the read-side view that adds
//! the derived prices.

use super::pricing::compute_discounted_price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable artwork identifier (creation timestamp in milliseconds for
/// entries added through the admin editor).
pub type ArtworkId = u64;

// =============================================================================
// Catalog Domain Models
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Sold,
    Reserved,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Reserved => "Reserved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArtworkKind {
    #[default]
    Original,
    Print,
}

impl ArtworkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Print => "Print",
        }
    }
}

/// A purchasable artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: ArtworkId,

    pub title: String,

    #[serde(default)]
    pub artist_statement: String,

    #[serde(default)]
    pub dimensions: String,

    #[serde(default)]
    pub medium: String,

    /// Base price before any discount
    pub price: Decimal,

    /// Discount in percent; only values in (0, 100] produce a discounted price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,

    #[serde(default)]
    pub availability: Availability,

    #[serde(rename = "type", default)]
    pub kind: ArtworkKind,

    #[serde(default)]
    pub primary_color: String,

    #[serde(default)]
    pub theme: String,

    /// Card thumbnail
    #[serde(default)]
    pub image_url: String,

    /// Gallery images, in display order
    #[serde(default)]
    pub images: Vec<String>,
}

impl Artwork {
    /// Discounted price derived from `price` and `discount_percentage`.
    /// Recomputed on every call.
    pub fn discounted_price(&self) -> Option<Decimal> {
        compute_discounted_price(self.price, self.discount_percentage)
    }

    /// The price a buyer actually pays.
    pub fn effective_price(&self) -> Decimal {
        self.discounted_price().unwrap_or(self.price)
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Image shown first on the detail page.
    pub fn main_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(&self.image_url)
    }
}

/// Artwork as returned to clients, with derived prices filled in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkView {
    #[serde(flatten)]
    pub artwork: Artwork,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,

    pub effective_price: Decimal,

    pub main_image: String,
}

impl From<&Artwork> for ArtworkView {
    fn from(artwork: &Artwork) -> Self {
        Self {
            discounted_price: artwork.discounted_price(),
            effective_price: artwork.effective_price(),
            main_image: artwork.main_image().to_string(),
            artwork: artwork.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal artwork for store tests.
    pub fn artwork(id: ArtworkId, price: Decimal, discount: Option<Decimal>) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {}", id),
            artist_statement: String::new(),
            dimensions: String::new(),
            medium: String::new(),
            price,
            discount_percentage: discount,
            availability: Availability::Available,
            kind: ArtworkKind::Original,
            primary_color: "Blue".into(),
            theme: "Abstract".into(),
            image_url: format!("https://img.test/{}.jpg", id),
            images: vec![],
        }
    }
}
