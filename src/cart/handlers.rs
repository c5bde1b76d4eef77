//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for the session cart and the
//! checkout hand-off.

use super::{helpers::*, models::*, store::CartStore};
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

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", delete(remove_item))
        .route("/checkout", post(checkout))
}

/// Endpoint: GET /cart
/// Unknown sessions read as an empty cart and are not stored.
async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = state
        .peek_session(&session_id, |s| CartView::from(&s.cart))
        .unwrap_or_else(|| CartView::from(&CartStore::default()));

    attach_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /cart/items
/// Adds one unit of an available artwork.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Result<Response> {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let artwork = state
        .catalog
        .get(payload.artwork_id)
        .ok_or(StorefrontError::ArtworkNotFound(payload.artwork_id))?;

    if !artwork.is_available() {
        return Err(StorefrontError::Unavailable {
            id: artwork.id,
            availability: artwork.availability,
        });
    }

    let view = {
        let mut session = state.session(&session_id);
        session.cart.add_to_cart(&artwork);
        CartView::from(&session.cart)
    };
    tracing::info!(
        session_id = %session_id,
        artwork_id = artwork.id,
        item_count = view.item_count,
        "added to cart"
    );

    Ok(attach_session_cookie(
        Json(view).into_response(),
        &session_id,
        is_new_session,
    ))
}

/// Endpoint: DELETE /cart/items/:id
/// Removes one unit; unknown ids leave the cart unchanged.
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<ArtworkId>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = state
        .update_session(&session_id, |s| {
            s.cart.remove_from_cart(id);
            CartView::from(&s.cart)
        })
        .unwrap_or_else(|| CartView::from(&CartStore::default()));

    attach_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: DELETE /cart
async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let view = state
        .update_session(&session_id, |s| {
            s.cart.clear_cart();
            CartView::from(&s.cart)
        })
        .unwrap_or_else(|| CartView::from(&CartStore::default()));

    attach_session_cookie(Json(view).into_response(), &session_id, is_new_session)
}

/// Endpoint: POST /checkout
/// Hands the cart total over to the hosted checkout and empties the cart.
async fn checkout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let hand_off = |cart: &mut CartStore| {
        let status = if cart.is_empty() { "empty" } else { "checked_out" };
        let response = CheckoutResponse {
            status: status.to_string(),
            checkout_url: state.checkout_url.clone(),
            total: cart.cart_total(),
            item_count: cart.item_count(),
            summary: format_item_summary(cart.lines()),
        };
        cart.clear_cart();
        response
    };
    let response = state
        .update_session(&session_id, |s| hand_off(&mut s.cart))
        .unwrap_or_else(|| hand_off(&mut CartStore::default()));

    if response.item_count > 0 {
        tracing::info!(
            session_id = %session_id,
            total = %response.total,
            summary = %response.summary,
            "checkout handed off"
        );
    }

    attach_session_cookie(Json(response).into_response(), &session_id, is_new_session)
}
