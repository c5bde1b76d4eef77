//! Wishlist Domain Module
//!
//! Saved artworks per session:
//! - The per-session wishlist store
//! - Request/response models
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use store::WishlistStore;
