//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, inputs, responses)
//! - The per-session cart store
//! - Formatting helpers
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartLine, CartView};
pub use store::CartStore;
