//! HTTP API request/response types.
//!
//! # Purpose
//! Defines the payload shapes crossing the relay's boundary and the subset
//! of the upstream directory response the relay understands.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by the webcam relay endpoint.
///
/// Raw strings on purpose: the handler parses them itself so that missing
/// or unparsable coordinates produce the relay's own error body instead of
/// the extractor's.
#[derive(Debug, Deserialize, IntoParams, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct WebcamQuery {
    /// Latitude in degrees, required.
    pub lat: Option<String>,
    /// Longitude in degrees, required.
    pub lon: Option<String>,
    /// Search radius in kilometers; `radius` is accepted as an alias.
    #[serde(rename = "maxDistance", alias = "radius")]
    pub max_distance: Option<String>,
}

/// One webcam entry from the directory.
///
/// Fields beyond the ones the relay filters on are preserved verbatim so
/// the outbound body mirrors the upstream shape.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct WebcamRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<WebcamLocation>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Location sub-structure of a webcam record.
///
/// Latitude and longitude are optional: a record whose location is missing
/// either one is excluded from filtered results, never an error.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct WebcamLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Parsed upstream body: the webcam collection plus every other top-level
/// field, mirrored back to the caller with `webcams` replaced by the
/// filtered subset.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct UpstreamResponse {
    pub webcams: Vec<WebcamRecord>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub service: String,
    pub api_version: String,
    pub default_radius_km: f64,
    pub cache_ttl_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
