// Movie Catalog - Web Server
// Loads the dataset, then serves the HTML views

use anyhow::{Context, Result};
use movie_catalog::{router, AppState, MovieStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Movie Catalog - Web Server");

    // Load before routing so no request ever sees a half-started store
    let store = MovieStore::load(config.data_path.clone()).await;
    if !store.is_loaded() {
        tracing::warn!("Serving with an empty catalog");
    }

    let app = router(AppState::new(store), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("Server running on http://{}", config.bind_addr);
    tracing::info!("Static assets from {:?}", config.public_dir);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
