//! REST API handlers for reading and writing reviews

use super::models::{Review, ReviewDraft};
use crate::catalog::models::ArtworkId;
use crate::catalog::source::CatalogSource;
use crate::error::{Result, StorefrontError};
use crate::session::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Creates routes for artwork reviews
pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/artworks/:id/reviews",
        get(list_reviews).post(submit_review),
    )
}

/// Endpoint: GET /artworks/:id/reviews
/// Approved reviews, newest first.
async fn list_reviews(
    State(state): State<SharedState>,
    Path(id): Path<ArtworkId>,
) -> Result<Json<Vec<Review>>> {
    if !state.catalog.contains(id) {
        return Err(StorefrontError::ArtworkNotFound(id));
    }
    Ok(Json(state.reviews.approved_for(id)))
}

/// Endpoint: POST /artworks/:id/reviews
/// Accepts a review for moderation.
async fn submit_review(
    State(state): State<SharedState>,
    Path(id): Path<ArtworkId>,
    Json(draft): Json<ReviewDraft>,
) -> Result<(StatusCode, Json<Review>)> {
    let review = state.reviews.submit(&state.catalog, id, draft)?;
    Ok((StatusCode::ACCEPTED, Json(review)))
}
