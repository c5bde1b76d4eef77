//! REST API handlers for browsing the catalog

use super::models::{ArtworkId, ArtworkView};
use super::query::CatalogQuery;
use super::source::CatalogSource;
use crate::error::{Result, StorefrontError};
use crate::reviews::models::{RatingSummary, Review};
use crate::session::{resolve_session_id, SharedState};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/artworks", get(list_artworks))
        .route("/artworks/:id", get(artwork_detail))
}

/// Product detail page payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetail {
    pub artwork: ArtworkView,
    pub reviews: Vec<Review>,
    pub rating: RatingSummary,
    pub in_wishlist: bool,
}

/// Endpoint: GET /artworks
/// Lists the catalog with the shop page filters and sort applied.
async fn list_artworks(
    State(state): State<SharedState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<ArtworkView>> {
    let artworks = state.catalog.query(&query);
    tracing::debug!(count = artworks.len(), ?query, "catalog listed");

    Json(artworks.iter().map(ArtworkView::from).collect())
}

/// Endpoint: GET /artworks/:id
/// Artwork detail with its approved reviews and rating.
async fn artwork_detail(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<ArtworkId>,
) -> Result<Json<ArtworkDetail>> {
    let artwork = state
        .catalog
        .get(id)
        .ok_or(StorefrontError::ArtworkNotFound(id))?;

    // Looking at a product must not start a session.
    let (session_id, _) = resolve_session_id(&headers);
    let in_wishlist = state
        .peek_session(&session_id, |s| s.wishlist.is_in_wishlist(id))
        .unwrap_or(false);

    Ok(Json(ArtworkDetail {
        artwork: ArtworkView::from(&artwork),
        reviews: state.reviews.approved_for(id),
        rating: state.reviews.rating_summary(id),
        in_wishlist,
    }))
}
