//! Storefront error types
//!
//! Store operations on missing entries are no-ops and never reach this enum.
//! These errors only cover lookups the HTTP surface cannot satisfy and
//! rejected form input.

use crate::catalog::models::{ArtworkId, Availability};
use crate::reviews::models::ReviewId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Artwork {0} not found")]
    ArtworkNotFound(ArtworkId),

    #[error("Review {0} not found")]
    ReviewNotFound(ReviewId),

    #[error("Artwork {id} is {availability:?} and cannot be added to the cart")]
    Unavailable {
        id: ArtworkId,
        availability: Availability,
    },

    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ArtworkNotFound(_) | Self::ReviewNotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
