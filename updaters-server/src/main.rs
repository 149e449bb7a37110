//! Updaters Server - latest AppImage release lookup API

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use updaters_server::{config::Config, routes, state};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "updaters_server=debug,updaters_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Create application state
    let state = state::AppState::new(&config.github_api)?;

    // Build router
    let app = routes::create_router(state, config.cors_origins.as_ref());

    // Start server
    tracing::info!("Starting server on {}", config.addr);
    tracing::info!("Using release API at {}", config.github_api);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
