//! Art Storefront Library
//!
//! This library provides the backend of a small art shop: the artwork
//! catalog with discount pricing, per-session carts and wishlists, reviews
//! with moderation, and the admin editing surface.

// Domain modules
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod reviews;
pub mod wishlist;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod session;

pub use error::{Result, StorefrontError};
