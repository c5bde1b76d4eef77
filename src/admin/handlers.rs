//! REST API handlers for the admin dashboard
//!
//! Catalog editing, the discounted-price preview of the artwork form and
//! the review moderation queue.

use crate::catalog::editor::{ArtworkDraft, PricePreview, PricePreviewInput};
use crate::catalog::models::{ArtworkId, ArtworkView};
use crate::error::Result;
use crate::reviews::models::{ModerationInput, ModerationQuery, Review, ReviewId};
use crate::session::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

/// Creates routes for admin operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/admin/artworks", post(create_artwork))
        .route(
            "/admin/artworks/:id",
            put(update_artwork).delete(delete_artwork),
        )
        .route("/admin/pricing/preview", post(preview_price))
        .route("/admin/reviews", get(list_reviews))
        .route("/admin/reviews/:id", put(moderate_review))
}

/// Endpoint: POST /admin/artworks
async fn create_artwork(
    State(state): State<SharedState>,
    Json(draft): Json<ArtworkDraft>,
) -> Result<(StatusCode, Json<ArtworkView>)> {
    let artwork = state.catalog.create(draft)?;
    Ok((StatusCode::CREATED, Json(ArtworkView::from(&artwork))))
}

/// Endpoint: PUT /admin/artworks/:id
async fn update_artwork(
    State(state): State<SharedState>,
    Path(id): Path<ArtworkId>,
    Json(draft): Json<ArtworkDraft>,
) -> Result<Json<ArtworkView>> {
    let artwork = state.catalog.update(id, draft)?;
    Ok(Json(ArtworkView::from(&artwork)))
}

/// Endpoint: DELETE /admin/artworks/:id
async fn delete_artwork(
    State(state): State<SharedState>,
    Path(id): Path<ArtworkId>,
) -> Result<StatusCode> {
    state.catalog.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /admin/pricing/preview
async fn preview_price(Json(input): Json<PricePreviewInput>) -> Json<PricePreview> {
    Json(PricePreview::from(input))
}

/// Endpoint: GET /admin/reviews?status=pending
async fn list_reviews(
    State(state): State<SharedState>,
    Query(query): Query<ModerationQuery>,
) -> Json<Vec<Review>> {
    Json(state.reviews.with_status(query.status))
}

/// Endpoint: PUT /admin/reviews/:id
async fn moderate_review(
    State(state): State<SharedState>,
    Path(id): Path<ReviewId>,
    Json(input): Json<ModerationInput>,
) -> Result<Json<Review>> {
    Ok(Json(state.reviews.moderate(id, input.status)?))
}
