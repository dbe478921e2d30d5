//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::leads::Pacing;
use crate::server::routes::{export_handler, generate_handler, health_handler};
use crate::server::static_files::serve_web_app;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pacing: Pacing,
}

/// Build the Axum application router
pub fn build_app(pacing: Pacing) -> Router {
    let app_state = AppState { pacing };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/generate-leads", post(generate_handler))
        .route("/api/export-leads", post(export_handler))
        .route("/health", get(health_handler))
        // Embedded single-page UI
        .fallback(serve_web_app)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
