//! Binary entry point: loads settings, prepares the database, serves the API.

use axum::{extract::Request, ServiceExt};
use starwars_api::{app, bootstrap, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("starwars_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let state = bootstrap(&settings.database_url, settings.max_connections).await?;

    let listener = TcpListener::bind(settings.bind_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    let app = app(state, settings.body_limit);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
