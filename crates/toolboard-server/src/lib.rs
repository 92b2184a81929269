pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> toolboard_core::Result<Router> {
    let app_state = state::AppState::new(root)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/status", get(routes::status::get_status))
        .route("/api/summary", get(routes::summary::get_summary))
        .route("/api/tools", get(routes::tools::list_tools))
        .route("/api/tools/{name}", get(routes::tools::get_tool))
        .layer(cors)
        .with_state(app_state))
}

/// Start the status API server.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = build_router(root)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("toolboard API listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
