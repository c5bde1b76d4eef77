//! REST API handlers for the wishlist

use super::models::*;
use super::store::WishlistStore;
use crate::catalog::models::ArtworkId;
use crate::catalog::source::CatalogSource;
use crate::error::{Result, StorefrontError};
use crate::session::{attach_session_cookie, resolve_session_id, SharedState};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for wishlist operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/wishlist", get(get_wishlist))
        .route("/wishlist/items", post(save_item))
        .route("/wishlist/items/:id", delete(remove_item))
        .route("/wishlist/items/:id/toggle", post(toggle_item))
}

/// Endpoint: GET /wishlist
/// Unknown sessions read as an empty wishlist and are not stored.
async fn get_wishlist(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = state
        .peek_session(&session_id, |s| WishlistView::from(&s.wishlist))
        .unwrap_or_else(|| WishlistView::from(&WishlistStore::default()));

    attach_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /wishlist/items
async fn save_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<SaveItemInput>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let artwork = state
        .catalog
        .get(payload.artwork_id)
        .ok_or(StorefrontError::ArtworkNotFound(payload.artwork_id))?;

    let view = {
        let mut session = state.session(&session_id);
        session.wishlist.add_to_wishlist(&artwork);
        WishlistView::from(&session.wishlist)
    };

    Ok(attach_session_cookie(
        Json(view).into_response(),
        &session_id,
        is_new_session,
    ))
}

/// Endpoint: DELETE /wishlist/items/:id
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<ArtworkId>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = state
        .update_session(&session_id, |s| {
            s.wishlist.remove_from_wishlist(id);
            WishlistView::from(&s.wishlist)
        })
        .unwrap_or_else(|| WishlistView::from(&WishlistStore::default()));

    attach_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /wishlist/items/:id/toggle
/// Saves the artwork if absent, removes it otherwise.
async fn toggle_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<ArtworkId>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    // Artworks gone from the catalog can still be dropped with DELETE.
    let artwork = state
        .catalog
        .get(id)
        .ok_or(StorefrontError::ArtworkNotFound(id))?;

    let response = {
        let mut session = state.session(&session_id);
        let in_wishlist = session.wishlist.toggle(&artwork);

        ToggleResponse {
            artwork_id: id,
            in_wishlist,
            item_count: session.wishlist.item_count(),
        }
    };
    tracing::debug!(artwork_id = id, in_wishlist = response.in_wishlist, "wishlist toggled");

    Ok(attach_session_cookie(
        Json(response).into_response(),
        &session_id,
        is_new_session,
    ))
}
