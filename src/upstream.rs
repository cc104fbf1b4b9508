//! Client for the upstream webcam directory service.
//!
//! # Purpose
//! Issues the single outbound search call per cache miss and parses the
//! directory's JSON response into the shapes the relay filters on.
//!
//! # Notes
//! The directory authenticates via a static `x-windy-key` header supplied
//! through process configuration. One attempt per call; retries are the
//! caller's (non-)concern.
use crate::api::types::{UpstreamResponse, WebcamRecord};
use serde_json::Value;

/// Header carrying the directory API key.
const API_KEY_HEADER: &str = "x-windy-key";

/// Errors returned while querying the webcam directory.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("upstream body was not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Webcam directory client.
///
/// # What it does
/// Builds the nearby-search URL, attaches the API key header, and decodes
/// the response into [`UpstreamResponse`].
///
/// # Why it exists
/// Keeps the wire contract with the directory in one place so handlers only
/// deal in parsed records.
#[derive(Debug, Clone)]
pub struct WebcamDirectoryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    limit: u32,
}

impl WebcamDirectoryClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            limit,
        }
    }

    /// Search the directory for webcams near a point.
    ///
    /// # Errors
    /// - `UpstreamError::Http` on transport failure.
    /// - `UpstreamError::Status` on any non-success status; the body is
    ///   captured for the API error's `details`.
    /// - `UpstreamError::Decode` when the body is not the expected JSON.
    pub async fn nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = format!(
            "{}/list/nearby={lat},{lon},{radius_km}/limit={}?show=webcams:location,player",
            self.base_url, self.limit
        );
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "webcam directory error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        parse_response(body)
    }
}

// Decode the directory body while preserving fields the relay does not
// model, so the outbound response can mirror the upstream shape.
fn parse_response(body: Value) -> Result<UpstreamResponse, UpstreamError> {
    let mut extra = match body {
        Value::Object(map) => map,
        other => {
            return Err(UpstreamError::Decode(serde::de::Error::custom(format!(
                "expected a JSON object, got {other}"
            ))))
        }
    };
    // A missing webcams collection is an empty result, not an error.
    let webcams: Vec<WebcamRecord> = match extra.remove("webcams") {
        Some(value) => serde_json::from_value(value).map_err(UpstreamError::Decode)?,
        None => Vec::new(),
    };
    Ok(UpstreamResponse { webcams, extra })
}
