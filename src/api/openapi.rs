//! OpenAPI schema aggregation for the relay API.
//!
//! # Purpose
//! Collects routes and schema types into a single OpenAPI document served
//! next to the Swagger UI.
use crate::api::{
    system,
    types::{
        ErrorResponse, HealthStatus, SystemInfo, UpstreamResponse, WebcamLocation, WebcamRecord,
    },
    webcams,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "nearcam",
        version = "v1",
        description = "Backend relay for nearby webcams with proximity filtering and response caching"
    ),
    paths(webcams::list_webcams, system::system_info, system::system_health),
    components(schemas(
        UpstreamResponse,
        WebcamRecord,
        WebcamLocation,
        ErrorResponse,
        SystemInfo,
        HealthStatus
    ))
)]
pub struct ApiDoc;
