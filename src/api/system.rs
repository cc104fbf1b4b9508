//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Lightweight endpoints for service metadata and liveness probes.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free; the relay has no
//!   backing store to probe, so health is purely "the process is serving".
use crate::api::types::{HealthStatus, SystemInfo};
use crate::app::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/system/info",
    tag = "system",
    responses(
        (status = 200, description = "Service identity and configured defaults", body = SystemInfo)
    )
)]
/// Return service identity and configured defaults.
///
/// # What it does
/// Exposes the service name, API version, default search radius, and cache
/// TTL so operators can confirm a deployment's configuration.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(SystemInfo {
        service: "nearcam".to_string(),
        api_version: state.api_version.clone(),
        default_radius_km: state.default_radius_km,
        cache_ttl_ms: state.cache_ttl_ms,
    })
}

#[utoipa::path(
    get,
    path = "/v1/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Service health", body = HealthStatus)
    )
)]
/// Return service health status.
///
/// # Errors
/// - Does not return errors.
pub(crate) async fn system_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
