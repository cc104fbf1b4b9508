//! Relay HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! Route composition lives here to keep `main` small and testable; tests
//! build the router directly from a hand-made `AppState`.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::cache::ResponseCache;
use crate::upstream::WebcamDirectoryClient;
use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub default_radius_km: f64,
    pub cache_ttl_ms: u64,
    pub cache: Arc<ResponseCache>,
    pub directory: WebcamDirectoryClient,
    pub cors_origin: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
        tracing::info_span!(
            "http.request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version()
        )
    });
    let cors_layer = cors_layer(state.cors_origin.as_deref());

    Router::new()
        .route("/", axum::routing::get(banner))
        .route("/api/webcams", axum::routing::get(api::webcams::list_webcams))
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .layer(cors_layer)
        .layer(trace_layer)
        .with_state(state)
}

// Restrict CORS to the configured frontend origin; stay permissive when no
// origin is configured or the configured value is not a valid header.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => CorsLayer::new().allow_origin(value),
        Some(Err(_)) => {
            tracing::warn!("invalid CORS origin configured, falling back to permissive");
            CorsLayer::new().allow_origin(Any)
        }
        None => CorsLayer::new().allow_origin(Any),
    }
}

async fn banner() -> &'static str {
    "nearcam relay is running"
}
