//! Admin catalog editor
//!
//! Create, update and delete for catalog entries. Input is validated here,
//! which is where out-of-range discounts are rejected.

use super::models::{Artwork, ArtworkId, ArtworkKind, Availability};
use super::pricing::{compute_discounted_price, MAX_PRICE};
use super::source::InMemoryCatalog;
use crate::error::{Result, StorefrontError};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::atomic::Ordering;
use validator::{Validate, ValidationError};

/// Form data for a new or edited artwork. Missing fields take the values of
/// the "Add New Artwork" template.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtworkDraft {
    #[validate(custom = "validate_title")]
    pub title: String,

    pub artist_statement: String,

    pub dimensions: String,

    pub medium: String,

    #[validate(custom = "validate_price")]
    pub price: Decimal,

    #[validate(custom = "validate_discount_percentage")]
    pub discount_percentage: Option<Decimal>,

    pub availability: Availability,

    #[serde(rename = "type")]
    pub kind: ArtworkKind,

    pub primary_color: String,

    pub theme: String,

    pub image_url: String,

    pub images: Vec<String>,
}

impl Default for ArtworkDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist_statement: String::new(),
            dimensions: String::new(),
            medium: String::new(),
            price: Decimal::ZERO,
            discount_percentage: Some(Decimal::ZERO),
            availability: Availability::Available,
            kind: ArtworkKind::Original,
            primary_color: "Blue".to_string(),
            theme: "Abstract".to_string(),
            image_url: "https://picsum.photos/seed/new/600/600".to_string(),
            images: vec!["https://picsum.photos/seed/new/1200/1200".to_string()],
        }
    }
}

impl ArtworkDraft {
    fn into_artwork(self, id: ArtworkId) -> Artwork {
        Artwork {
            id,
            title: self.title.trim().to_string(),
            artist_statement: self.artist_statement,
            dimensions: self.dimensions,
            medium: self.medium,
            price: self.price,
            discount_percentage: self.discount_percentage,
            availability: self.availability,
            kind: self.kind,
            primary_color: self.primary_color,
            theme: self.theme,
            image_url: self.image_url,
            images: self.images,
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_title(title: &str) -> std::result::Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(invalid("required", "Title is required."));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> std::result::Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(invalid("required", "Price is required and must be positive."));
    }
    if *price > MAX_PRICE {
        return Err(invalid("range", "Price must not exceed 1,000,000,000."));
    }
    Ok(())
}

fn validate_discount_percentage(percentage: &Decimal) -> std::result::Result<(), ValidationError> {
    if *percentage < Decimal::ZERO || *percentage > Decimal::ONE_HUNDRED {
        return Err(invalid("range", "Discount percentage must be between 0 and 100."));
    }
    Ok(())
}

/// Body of the admin price preview
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePreviewInput {
    pub price: Decimal,

    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePreview {
    pub discounted_price: Option<Decimal>,
}

impl From<PricePreviewInput> for PricePreview {
    fn from(input: PricePreviewInput) -> Self {
        Self {
            discounted_price: compute_discounted_price(input.price, input.discount_percentage),
        }
    }
}

impl InMemoryCatalog {
    /// Hands out `max(now_ms, last + 1)` so ids keep increasing even when two
    /// entries are created in the same millisecond.
    fn next_id(&self) -> ArtworkId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut assigned = now;
        let _ = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                assigned = now.max(last.saturating_add(1));
                Some(assigned)
            });
        assigned
    }

    pub fn create(&self, draft: ArtworkDraft) -> Result<Artwork> {
        draft.validate()?;

        let artwork = draft.into_artwork(self.next_id());
        self.entries.insert(artwork.id, artwork.clone());
        tracing::info!(id = artwork.id, title = %artwork.title, "artwork created");

        Ok(artwork)
    }

    pub fn update(&self, id: ArtworkId, draft: ArtworkDraft) -> Result<Artwork> {
        draft.validate()?;

        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or(StorefrontError::ArtworkNotFound(id))?;
        *entry = draft.into_artwork(id);
        tracing::info!(id, "artwork updated");

        Ok(entry.clone())
    }

    pub fn delete(&self, id: ArtworkId) -> Result<Artwork> {
        let (_, removed) = self
            .entries
            .remove(&id)
            .ok_or(StorefrontError::ArtworkNotFound(id))?;
        tracing::info!(id, "artwork deleted");

        Ok(removed)
    }
}
