//! Runtime configuration
//!
//! Values are read from the process environment (after `.env` has been
//! loaded by `main`). Anything malformed is a fatal startup error.

use crate::catalog::models::{Artwork, ArtworkId};
use crate::catalog::pricing::MAX_PRICE;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const ADDR_VAR: &str = "STOREFRONT_ADDR";
pub const CATALOG_PATH_VAR: &str = "STOREFRONT_CATALOG_PATH";
pub const CHECKOUT_URL_VAR: &str = "STOREFRONT_CHECKOUT_URL";
pub const SESSION_IDLE_VAR: &str = "STOREFRONT_SESSION_IDLE_SECS";
pub const MAX_SESSIONS_VAR: &str = "STOREFRONT_MAX_SESSIONS";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CHECKOUT_URL: &str = "https://checkout.example.com/cart";
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Failed to read catalog file {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog file {path}: artwork {id} has a price outside 0 to {max}")]
    CatalogPrice {
        path: PathBuf,
        id: ArtworkId,
        max: rust_decimal::Decimal,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,

    /// Optional JSON file holding the seed catalog
    pub catalog_path: Option<PathBuf>,

    /// Hosted checkout page the cart is handed off to
    pub checkout_url: String,

    /// Sessions untouched for this long are dropped by the sweeper
    pub session_idle_timeout: Duration,

    /// Upper bound on live sessions; the least recently used one makes room
    pub max_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            catalog_path: None,
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            session_idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup, so tests need not
    /// touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup(ADDR_VAR) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw.clone(),
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let checkout_url = lookup(CHECKOUT_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHECKOUT_URL.to_string());

        let idle_secs = positive(&lookup, SESSION_IDLE_VAR)?.unwrap_or(DEFAULT_SESSION_IDLE_SECS);
        let max_sessions = match positive(&lookup, MAX_SESSIONS_VAR)? {
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
            None => DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            addr,
            catalog_path,
            checkout_url,
            session_idle_timeout: Duration::from_secs(idle_secs),
            max_sessions,
        })
    }

    /// Loads the seed catalog: the configured JSON file if any, otherwise the
    /// built-in gallery.
    pub fn load_catalog(&self) -> Result<Vec<Artwork>, ConfigError> {
        match &self.catalog_path {
            Some(path) => read_catalog_file(path),
            None => Ok(crate::catalog::seed::artworks()),
        }
    }
}

fn positive<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn read_catalog_file(path: &Path) -> Result<Vec<Artwork>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let artworks = serde_json::from_str(&raw).map_err(|source| ConfigError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    check_prices(path, artworks)
}

/// File catalogs get the same price bound as the admin editor.
fn check_prices(path: &Path, artworks: Vec<Artwork>) -> Result<Vec<Artwork>, ConfigError> {
    match artworks
        .iter()
        .find(|a| a.price < rust_decimal::Decimal::ZERO || a.price > MAX_PRICE)
    {
        Some(bad) => Err(ConfigError::CatalogPrice {
            path: path.to_path_buf(),
            id: bad.id,
            max: MAX_PRICE,
        }),
        None => Ok(artworks),
    }
}
