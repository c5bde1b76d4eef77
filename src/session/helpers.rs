//! Session cookie helpers

use axum::{
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::Response,
};
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "storefront_session";

/// Creates a new random session identifier.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reads the session id from the request cookies.
///
/// Returns the id and whether it was freshly minted, in which case the
/// response must set the cookie. Values that are not UUIDs are ignored.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .find_map(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(|id| id.simple().to_string());

    match existing {
        Some(id) => (id, false),
        None => (new_session_id(), true),
    }
}

/// Adds the `Set-Cookie` header when the session was just created.
pub fn attach_session_cookie(mut response: Response, session_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().insert(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "could not encode session cookie"),
        }
    }
    response
}
