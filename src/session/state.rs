//! Application and Session State
//!
//! `AppState` is built once at startup and shared with every handler. Each
//! browser session gets its own `Session`, which owns that visitor's cart
//! and wishlist. Stores are only reachable through a session.
//!
//! Sessions are created on the first write only. The map is bounded by
//! `max_sessions` and swept of idle entries by `evict_idle_sessions`.

use crate::cart::store::CartStore;
use crate::catalog::models::Artwork;
use crate::catalog::source::InMemoryCatalog;
use crate::config::{Config, ConfigError};
use crate::reviews::board::ReviewBoard;
use crate::wishlist::store::WishlistStore;
use dashmap::{mapref::one::RefMut, DashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Per-visitor state
#[derive(Debug)]
pub struct Session {
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            cart: CartStore::default(),
            wishlist: WishlistStore::default(),
            last_seen: Instant::now(),
        }
    }
}

impl Session {
    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }
}

/// Core application state containing sessions, the catalog and reviews
pub struct AppState {
    /// Sessions keyed by the id carried in the session cookie.
    /// DashMap allows concurrent access without external Mutexes.
    sessions: DashMap<String, Session>,

    pub catalog: InMemoryCatalog,

    pub reviews: ReviewBoard,

    /// Hosted checkout page returned by the checkout hand-off
    pub checkout_url: String,

    session_idle_timeout: Duration,

    max_sessions: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default(), crate::catalog::seed::artworks())
    }
}

impl AppState {
    pub fn new(config: &Config, artworks: Vec<Artwork>) -> Self {
        tracing::info!(artworks = artworks.len(), "catalog loaded");

        Self {
            sessions: DashMap::new(),
            catalog: InMemoryCatalog::new(artworks),
            reviews: ReviewBoard::seeded(),
            checkout_url: config.checkout_url.clone(),
            session_idle_timeout: config.session_idle_timeout,
            max_sessions: config.max_sessions.max(1),
        }
    }

    /// Builds the state from configuration, loading the seed catalog.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let artworks = config.load_catalog()?;
        Ok(Self::new(config, artworks))
    }

    /// Returns the session for `session_id`, starting a fresh one if the id
    /// is unknown (e.g. after a restart). Only call this on a write path.
    ///
    /// The returned guard locks the session's shard; drop it before touching
    /// another session.
    pub fn session(&self, session_id: &str) -> RefMut<'_, String, Session> {
        if !self.sessions.contains_key(session_id) && self.sessions.len() >= self.max_sessions {
            self.make_room();
        }

        let mut session = self.sessions.entry(session_id.to_string()).or_insert_with(|| {
            tracing::debug!(session_id, "session started");
            Session::default()
        });
        session.touch();
        session
    }

    /// Runs `read` against an existing session without creating one.
    pub fn peek_session<T>(&self, session_id: &str, read: impl FnOnce(&Session) -> T) -> Option<T> {
        self.sessions.get(session_id).map(|s| read(&s))
    }

    /// Runs `update` against an existing session without creating one.
    pub fn update_session<T>(
        &self,
        session_id: &str,
        update: impl FnOnce(&mut Session) -> T,
    ) -> Option<T> {
        self.sessions.get_mut(session_id).map(|mut s| {
            s.touch();
            update(&mut s)
        })
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn has_session(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Drops sessions idle for longer than the configured timeout and
    /// returns how many went.
    pub fn evict_idle_sessions(&self) -> usize {
        self.evict_idle(self.session_idle_timeout)
    }

    fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.idle_for() < max_idle);
        before.saturating_sub(self.sessions.len())
    }

    /// Frees a slot for a new session: idle ones first, otherwise the least
    /// recently seen.
    fn make_room(&self) {
        if self.evict_idle_sessions() > 0 {
            return;
        }

        let oldest = self
            .sessions
            .iter()
            .max_by_key(|entry| entry.idle_for())
            .map(|entry| entry.key().clone());
        if let Some(id) = oldest {
            self.sessions.remove(&id);
            tracing::debug!(session_id = %id, "session evicted at capacity");
        }
    }
}
