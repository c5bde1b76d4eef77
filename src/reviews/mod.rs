//! Reviews Domain Module
//!
//! Visitor reviews of artworks, held for moderation before they show on the
//! detail page.

pub mod board;
pub mod handlers;
pub mod models;
pub mod seed;

pub use board::ReviewBoard;
pub use handlers::routes;
pub use models::{RatingSummary, Review, ReviewStatus};
