//! Session Module
//!
//! This module contains the shared application state and the per-visitor
//! sessions that own a cart and a wishlist, plus the cookie helpers that tie
//! requests to a session.

pub mod helpers;
pub mod state;

// Re-export commonly used types for convenience
pub use helpers::{attach_session_cookie, resolve_session_id, SESSION_COOKIE};
pub use state::{AppState, Session, SharedState};
