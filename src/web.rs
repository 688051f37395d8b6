use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;

/// Run the plan API server until shutdown.
///
/// Serves the JSON API under `/api` and falls back to the `static` directory
/// so a single-page form can be deployed alongside the binary.
pub async fn run(port: u16) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router())
        .fallback_service(ServeDir::new("static"))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Plan API running at http://localhost:{}", port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
