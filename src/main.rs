//! Server binary: loads config from env (and `.env`), opens the SQLite pool, creates tables, serves the API.

use clients_api::{apply_migrations, app, connect, ensure_database_exists, load_from_env, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clients_api=info")),
        )
        .init();

    let config = load_from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config.database_url).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(pool.clone(), &config);
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
