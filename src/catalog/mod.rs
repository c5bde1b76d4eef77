//! Catalog Domain Module
//!
//! This module contains everything about the artworks for sale:
//! - Domain models (Artwork, availability, derived price view)
//! - Discount price calculation
//! - Shop page filtering and sorting
//! - The catalog source boundary and its in-memory implementation
//! - Admin editing (create/update/delete)
//! - REST API handlers for browsing

pub mod editor;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod query;
pub mod seed;
pub mod source;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Artwork, ArtworkId, ArtworkView};
pub use pricing::compute_discounted_price;
pub use source::{CatalogSource, InMemoryCatalog};
