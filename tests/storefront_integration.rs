//! Integration tests for the storefront HTTP API
//!
//! These tests drive the full router and verify:
//! - Catalog browsing, filtering and product detail
//! - Session carts and the checkout hand-off
//! - Wishlists
//! - Review submission and moderation
//! - Admin catalog editing
//! - Error handling

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

// Import from the main crate
use art_storefront::config::Config;
use art_storefront::router::create_app_router;
use art_storefront::session::{AppState, SharedState};

/// Helper function to create a test app instance seeded with the built-in gallery
fn create_test_app() -> axum::Router {
    create_test_app_with_state().0
}

/// Same as `create_test_app`, keeping a handle on the state for inspection
fn create_test_app_with_state() -> (axum::Router, SharedState) {
    let state = Arc::new(AppState::default());
    (create_app_router(state.clone()), state)
}

struct TestResponse {
    status: StatusCode,
    body: Value,
    /// `name=value` part of any Set-Cookie header, ready to send back
    cookie: Option<String>,
}

/// Helper function to send a request and collect status, JSON body and session cookie
async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    TestResponse {
        status,
        body,
        cookie,
    }
}

/// Gets a session cookie by reading the (empty) cart. Nothing is stored
/// until the first write.
async fn start_session(app: &axum::Router) -> String {
    let res = send(app, "GET", "/cart", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    res.cookie.expect("new session sets a cookie")
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = create_test_app();
    let res = send(&app, "GET", "/health", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "healthy");
}

#[tokio::test]
async fn test_list_artworks_newest_first() {
    let app = create_test_app();
    let res = send(&app, "GET", "/artworks", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    let ids: Vec<u64> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn test_list_artworks_type_filter() {
    let app = create_test_app();
    let res = send(&app, "GET", "/artworks?type=Print", None, None).await;

    let artworks = res.body.as_array().unwrap();
    assert_eq!(artworks.len(), 2);
    assert!(artworks.iter().all(|a| a["type"] == "Print"));
}

#[tokio::test]
async fn test_list_artworks_price_sort_and_range() {
    let app = create_test_app();
    let res = send(
        &app,
        "GET",
        "/artworks?sort=price-low-high&maxPrice=100",
        None,
        None,
    )
    .await;

    let prices: Vec<f64> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["effectivePrice"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![36.0, 65.0]);
}

#[tokio::test]
async fn test_artwork_detail() {
    let app = create_test_app();
    let res = send(&app, "GET", "/artworks/1", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["artwork"]["title"], "Ocean Mandala");
    assert_eq!(res.body["rating"]["reviewCount"], 2);
    assert_eq!(res.body["rating"]["averageRating"], 4.5);
    assert_eq!(res.body["reviews"].as_array().unwrap().len(), 2);
    assert_eq!(res.body["inWishlist"], false);
    // Browsing does not start a session
    assert!(res.cookie.is_none());
}

#[tokio::test]
async fn test_artwork_detail_shows_discount() {
    let app = create_test_app();
    let res = send(&app, "GET", "/artworks/2", None, None).await;

    let artwork = &res.body["artwork"];
    assert_eq!(artwork["price"].as_f64(), Some(620.0));
    assert_eq!(artwork["discountedPrice"].as_f64(), Some(558.0));
}

#[tokio::test]
async fn test_artwork_detail_not_found() {
    let app = create_test_app();
    let res = send(&app, "GET", "/artworks/999", None, None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body["error"].as_str().unwrap().contains("999"));
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_cart_accumulates_within_session() {
    let app = create_test_app();

    let first = send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 1 })), None).await;
    assert_eq!(first.status, StatusCode::OK);
    let cookie = first.cookie.expect("first add starts a session");

    let second = send(
        &app,
        "POST",
        "/cart/items",
        Some(json!({ "artworkId": 1 })),
        Some(cookie.as_str()),
    )
    .await;
    assert!(second.cookie.is_none());

    let cart = send(&app, "GET", "/cart", None, Some(cookie.as_str())).await;
    let lines = cart.body["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(cart.body["itemCount"], 2);
    assert_eq!(cart.body["total"].as_f64(), Some(900.0));
}

#[tokio::test]
async fn test_cart_sessions_are_isolated() {
    let app = create_test_app();
    let alice = start_session(&app).await;
    let bob = start_session(&app).await;

    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 4 })), Some(alice.as_str())).await;

    let cart = send(&app, "GET", "/cart", None, Some(bob.as_str())).await;
    assert_eq!(cart.body["itemCount"], 0);
}

#[tokio::test]
async fn test_cart_mixed_total() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    for id in [1, 1, 6] {
        send(&app, "POST", "/cart/items", Some(json!({ "artworkId": id })), Some(cookie.as_str())).await;
    }

    let cart = send(&app, "GET", "/cart", None, Some(cookie.as_str())).await;
    // 2 x 450.00 + 1 x (45.00 less 20%)
    assert_eq!(cart.body["total"].as_f64(), Some(936.0));
    assert_eq!(cart.body["itemCount"], 3);
}

#[tokio::test]
async fn test_cart_remove_decrements_then_deletes() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 4 })), Some(cookie.as_str())).await;
    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 4 })), Some(cookie.as_str())).await;

    let res = send(&app, "DELETE", "/cart/items/4", None, Some(cookie.as_str())).await;
    assert_eq!(res.body["lines"][0]["quantity"], 1);

    let res = send(&app, "DELETE", "/cart/items/4", None, Some(cookie.as_str())).await;
    assert_eq!(res.body["lines"].as_array().unwrap().len(), 0);
    assert_eq!(res.body["itemCount"], 0);

    // Removing something that is not there is not an error
    let res = send(&app, "DELETE", "/cart/items/4", None, Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_cart_rejects_unavailable_and_unknown() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    let sold = send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 3 })), Some(cookie.as_str())).await;
    assert_eq!(sold.status, StatusCode::CONFLICT);

    let reserved =
        send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 5 })), Some(cookie.as_str())).await;
    assert_eq!(reserved.status, StatusCode::CONFLICT);

    let unknown =
        send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 999 })), Some(cookie.as_str())).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let cart = send(&app, "GET", "/cart", None, Some(cookie.as_str())).await;
    assert_eq!(cart.body["itemCount"], 0);
}

#[tokio::test]
async fn test_clear_cart() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 1 })), Some(cookie.as_str())).await;
    let res = send(&app, "DELETE", "/cart", None, Some(cookie.as_str())).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["itemCount"], 0);
}

#[tokio::test]
async fn test_checkout_hands_off_and_clears() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 2 })), Some(cookie.as_str())).await;
    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 6 })), Some(cookie.as_str())).await;

    let res = send(&app, "POST", "/checkout", None, Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "checked_out");
    assert_eq!(res.body["itemCount"], 2);
    assert_eq!(res.body["total"].as_f64(), Some(594.0));
    assert_eq!(res.body["summary"], "1x Golden Sun, 1x Violet Night");
    assert!(res.body["checkoutUrl"].as_str().unwrap().starts_with("https://"));

    let cart = send(&app, "GET", "/cart", None, Some(cookie.as_str())).await;
    assert_eq!(cart.body["itemCount"], 0);
}

#[tokio::test]
async fn test_checkout_empty_cart() {
    let app = create_test_app();
    let res = send(&app, "POST", "/checkout", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "empty");
    assert_eq!(res.body["itemCount"], 0);
}

// =============================================================================
// Wishlist
// =============================================================================

#[tokio::test]
async fn test_wishlist_add_is_idempotent() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    for _ in 0..2 {
        let res = send(&app, "POST", "/wishlist/items", Some(json!({ "artworkId": 3 })), Some(cookie.as_str())).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["itemCount"], 1);
    }

    let detail = send(&app, "GET", "/artworks/3", None, Some(cookie.as_str())).await;
    assert_eq!(detail.body["inWishlist"], true);
}

#[tokio::test]
async fn test_wishlist_toggle_and_remove() {
    let app = create_test_app();
    let cookie = start_session(&app).await;

    let on = send(&app, "POST", "/wishlist/items/5/toggle", None, Some(cookie.as_str())).await;
    assert_eq!(on.body["inWishlist"], true);
    assert_eq!(on.body["itemCount"], 1);

    let off = send(&app, "POST", "/wishlist/items/5/toggle", None, Some(cookie.as_str())).await;
    assert_eq!(off.body["inWishlist"], false);
    assert_eq!(off.body["itemCount"], 0);

    send(&app, "POST", "/wishlist/items", Some(json!({ "artworkId": 2 })), Some(cookie.as_str())).await;
    send(&app, "POST", "/wishlist/items", Some(json!({ "artworkId": 1 })), Some(cookie.as_str())).await;
    let res = send(&app, "DELETE", "/wishlist/items/2", None, Some(cookie.as_str())).await;
    assert_eq!(res.body["itemCount"], 1);
    assert_eq!(res.body["items"][0]["id"], 1);

    // Missing ids are a no-op
    let res = send(&app, "DELETE", "/wishlist/items/2", None, Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["itemCount"], 1);
}

#[tokio::test]
async fn test_wishlist_unknown_artwork() {
    let app = create_test_app();
    let res = send(&app, "POST", "/wishlist/items/999/toggle", None, None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn test_review_submission_and_moderation() {
    let app = create_test_app();

    let res = send(
        &app,
        "POST",
        "/artworks/3/reviews",
        Some(json!({ "author": "Lee", "rating": 4, "text": "The reds glow at sunset." })),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::ACCEPTED);
    assert_eq!(res.body["status"], "pending");
    let review_id = res.body["id"].as_u64().unwrap();

    let listed = send(&app, "GET", "/artworks/3/reviews", None, None).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 0);

    let queue = send(&app, "GET", "/admin/reviews?status=pending", None, None).await;
    assert_eq!(queue.body.as_array().unwrap().len(), 2);

    let res = send(
        &app,
        "PUT",
        &format!("/admin/reviews/{}", review_id),
        Some(json!({ "status": "approved" })),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "approved");

    let detail = send(&app, "GET", "/artworks/3", None, None).await;
    assert_eq!(detail.body["rating"]["reviewCount"], 1);
    assert_eq!(detail.body["rating"]["averageRating"], 4.0);
}

#[tokio::test]
async fn test_review_validation() {
    let app = create_test_app();

    let no_rating = send(
        &app,
        "POST",
        "/artworks/1/reviews",
        Some(json!({ "rating": 0, "text": "Long enough to count." })),
        None,
    )
    .await;
    assert_eq!(no_rating.status, StatusCode::UNPROCESSABLE_ENTITY);

    let too_short = send(
        &app,
        "POST",
        "/artworks/1/reviews",
        Some(json!({ "rating": 5, "text": "Nice." })),
        None,
    )
    .await;
    assert_eq!(too_short.status, StatusCode::UNPROCESSABLE_ENTITY);

    let unknown = send(
        &app,
        "POST",
        "/artworks/999/reviews",
        Some(json!({ "rating": 5, "text": "Long enough to count." })),
        None,
    )
    .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let missing = send(
        &app,
        "PUT",
        "/admin/reviews/999",
        Some(json!({ "status": "approved" })),
        None,
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Admin
// =============================================================================

#[tokio::test]
async fn test_admin_artwork_lifecycle() {
    let app = create_test_app();

    let created = send(
        &app,
        "POST",
        "/admin/artworks",
        Some(json!({
            "title": "Saffron Spiral",
            "price": 200.0,
            "discountPercentage": 15.0,
            "type": "Print"
        })),
        None,
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["discountedPrice"].as_f64(), Some(170.0));
    assert_eq!(created.body["availability"], "Available");
    let id = created.body["id"].as_u64().unwrap();

    // New entries sort first
    let listed = send(&app, "GET", "/artworks", None, None).await;
    assert_eq!(listed.body[0]["id"].as_u64(), Some(id));

    let updated = send(
        &app,
        "PUT",
        &format!("/admin/artworks/{}", id),
        Some(json!({ "title": "Saffron Spiral", "price": 200.0, "discountPercentage": 0.0 })),
        None,
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(updated.body.get("discountedPrice").is_none());
    assert_eq!(updated.body["effectivePrice"].as_f64(), Some(200.0));

    let deleted = send(&app, "DELETE", &format!("/admin/artworks/{}", id), None, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = send(&app, "GET", &format!("/artworks/{}", id), None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_rejects_invalid_drafts() {
    let app = create_test_app();

    let no_title = send(&app, "POST", "/admin/artworks", Some(json!({ "price": 10.0 })), None).await;
    assert_eq!(no_title.status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_discount = send(
        &app,
        "POST",
        "/admin/artworks",
        Some(json!({ "title": "Too Generous", "price": 10.0, "discountPercentage": 150.0 })),
        None,
    )
    .await;
    assert_eq!(bad_discount.status, StatusCode::UNPROCESSABLE_ENTITY);

    let missing = send(&app, "DELETE", "/admin/artworks/999", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_price_preview() {
    let app = create_test_app();

    let res = send(
        &app,
        "POST",
        "/admin/pricing/preview",
        Some(json!({ "price": 200.0, "discountPercentage": 100.0 })),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["discountedPrice"].as_f64(), Some(0.0));

    let res = send(
        &app,
        "POST",
        "/admin/pricing/preview",
        Some(json!({ "price": 200.0, "discountPercentage": 0.0 })),
        None,
    )
    .await;
    assert!(res.body["discountedPrice"].is_null());
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn test_reads_and_noop_writes_store_no_session() {
    let (app, state) = create_test_app_with_state();

    for _ in 0..20 {
        let res = send(&app, "GET", "/cart", None, None).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["itemCount"], 0);
    }
    let res = send(&app, "GET", "/wishlist", None, None).await;
    assert_eq!(res.body["itemCount"], 0);

    send(&app, "DELETE", "/cart/items/1", None, None).await;
    send(&app, "DELETE", "/cart", None, None).await;
    send(&app, "DELETE", "/wishlist/items/1", None, None).await;
    let res = send(&app, "POST", "/checkout", None, None).await;
    assert_eq!(res.body["status"], "empty");

    assert_eq!(state.session_count(), 0);
}

#[tokio::test]
async fn test_rejected_writes_leave_no_session() {
    let (app, state) = create_test_app_with_state();
    let cookie = start_session(&app).await;

    let res = send(&app, "POST", "/wishlist/items/999/toggle", None, Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 999 })), Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 3 })), Some(cookie.as_str())).await;
    assert_eq!(res.status, StatusCode::CONFLICT);

    assert_eq!(state.session_count(), 0);

    // The first real write creates it
    send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 1 })), Some(cookie.as_str())).await;
    assert_eq!(state.session_count(), 1);
}

#[tokio::test]
async fn test_non_uuid_cookie_gets_fresh_session() {
    let (app, state) = create_test_app_with_state();
    let forged = "storefront_session=attacker-chosen";

    let res = send(&app, "POST", "/cart/items", Some(json!({ "artworkId": 1 })), Some(forged)).await;
    assert_eq!(res.status, StatusCode::OK);

    let fresh = res.cookie.expect("replacement cookie is set");
    assert_ne!(fresh, forged);
    assert!(!state.has_session("attacker-chosen"));
    assert_eq!(state.session_count(), 1);

    // The forged cookie does not reach the cart it just filled
    let cart = send(&app, "GET", "/cart", None, Some(forged)).await;
    assert_eq!(cart.body["itemCount"], 0);
    let cart = send(&app, "GET", "/cart", None, Some(fresh.as_str())).await;
    assert_eq!(cart.body["itemCount"], 1);
}

#[tokio::test]
async fn test_session_count_is_capped() {
    let config = Config {
        max_sessions: 3,
        ..Config::default()
    };
    let state = Arc::new(AppState::from_config(&config).unwrap());
    let app = create_app_router(state.clone());

    for _ in 0..10 {
        let res = send(&app, "POST", "/wishlist/items", Some(json!({ "artworkId": 2 })), None).await;
        assert_eq!(res.status, StatusCode::OK);
    }

    assert_eq!(state.session_count(), 3);
}

// =============================================================================
// Oversized prices
// =============================================================================

#[tokio::test]
async fn test_oversized_prices_do_not_crash() {
    let app = create_test_app();

    let preview = send(
        &app,
        "POST",
        "/admin/pricing/preview",
        Some(json!({ "price": 7.0e28, "discountPercentage": 50.0 })),
        None,
    )
    .await;
    assert_eq!(preview.status, StatusCode::OK);
    assert!(preview.body["discountedPrice"].is_null());

    let created = send(
        &app,
        "POST",
        "/admin/artworks",
        Some(json!({ "title": "Vault", "price": 7.0e28, "discountPercentage": 50.0 })),
        None,
    )
    .await;
    assert_eq!(created.status, StatusCode::UNPROCESSABLE_ENTITY);

    // The service keeps answering
    let health = send(&app, "GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
}
