use anyhow::Context;
use art_storefront::config::Config;
use art_storefront::router::create_app_router;
use art_storefront::session::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration problems are fatal
    let config = Config::from_env().context("invalid configuration")?;

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config).context("failed to load catalog")?);

    // Drop idle sessions in the background
    let sweeper = Arc::clone(&state);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let evicted = sweeper.evict_idle_sessions();
            if evicted > 0 {
                tracing::debug!(evicted, remaining = sweeper.session_count(), "idle sessions swept");
            }
        }
    });

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("Server running on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
