//! Webcam relay handler.
//!
//! # Purpose and responsibility
//! The one endpoint this service exists for: validate coordinates, consult
//! the response cache, and on a miss query the webcam directory, filter the
//! results by great-circle distance, and cache the filtered body.
//!
//! # Key invariants and assumptions
//! - Client input errors short-circuit before any upstream call and never
//!   touch the cache.
//! - Only successful, parsed upstream results are written to the cache.
//! - Records without usable location data are dropped, not errors.
use crate::api::error::{api_internal_message, api_upstream_error, api_validation_error, ApiError};
use crate::api::types::{UpstreamResponse, WebcamQuery, WebcamRecord};
use crate::app::AppState;
use crate::cache::ResponseCache;
use crate::geo::{haversine_km, Coordinate};
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/api/webcams",
    tag = "webcams",
    params(WebcamQuery),
    responses(
        (status = 200, description = "Webcams near the requested point", body = UpstreamResponse),
        (status = 400, description = "Missing or invalid coordinates", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Webcam directory failure", body = crate::api::types::ErrorResponse)
    )
)]
/// Relay a nearby-webcams query.
///
/// # What it does
/// Parses `lat`/`lon`/`maxDistance`, serves a cached body when one is fresh
/// enough, and otherwise fetches from the directory, filters by distance,
/// and caches the outcome.
///
/// # Errors
/// - 400 when `lat`/`lon` are missing, non-numeric, or out of range.
/// - 500 when the directory call fails or its body cannot be parsed.
pub(crate) async fn list_webcams(
    State(state): State<AppState>,
    Query(query): Query<WebcamQuery>,
) -> Result<Json<Value>, ApiError> {
    let (origin, radius_km) = parse_query(&query, state.default_radius_km)?;

    let key = ResponseCache::fingerprint(origin.lat, origin.lon, radius_km);
    if let Some(cached) = state.cache.get(&key).await {
        metrics::counter!("nearcam_cache_hits_total").increment(1);
        tracing::debug!(%key, "serving cached webcam response");
        return Ok(Json(cached));
    }
    metrics::counter!("nearcam_cache_misses_total").increment(1);

    // Another request for the same key may be in flight right now; both
    // will fetch and the last put wins. Accepted duplicate work.
    metrics::counter!("nearcam_upstream_requests_total").increment(1);
    let mut upstream = state
        .directory
        .nearby(origin.lat, origin.lon, radius_km)
        .await
        .map_err(|err| {
            metrics::counter!("nearcam_upstream_failures_total").increment(1);
            api_upstream_error(&err)
        })?;

    let before = upstream.webcams.len();
    upstream
        .webcams
        .retain(|record| within_radius(record, origin, radius_km));
    tracing::info!(
        lat = origin.lat,
        lon = origin.lon,
        radius_km,
        fetched = before,
        kept = upstream.webcams.len(),
        "webcam directory query"
    );

    let body = serde_json::to_value(&upstream)
        .map_err(|_| api_internal_message("failed to encode webcam response"))?;
    state.cache.put(&key, body.clone()).await;
    Ok(Json(body))
}

// Distance filter; records with no location or a partial one are dropped.
fn within_radius(record: &WebcamRecord, origin: Coordinate, radius_km: f64) -> bool {
    let Some(location) = &record.location else {
        return false;
    };
    let (Some(latitude), Some(longitude)) = (location.latitude, location.longitude) else {
        return false;
    };
    haversine_km(origin, Coordinate::new(latitude, longitude)) <= radius_km
}

fn parse_query(query: &WebcamQuery, default_radius_km: f64) -> Result<(Coordinate, f64), ApiError> {
    let (Some(lat), Some(lon)) = (query.lat.as_deref(), query.lon.as_deref()) else {
        return Err(api_validation_error("latitude and longitude are required"));
    };
    let lat: f64 = lat
        .parse()
        .map_err(|_| api_validation_error("lat must be numeric"))?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| api_validation_error("lon must be numeric"))?;
    let origin = Coordinate::new(lat, lon);
    if !origin.in_range() {
        return Err(api_validation_error(
            "lat must be within [-90, 90] and lon within [-180, 180]",
        ));
    }

    let radius_km = match query.max_distance.as_deref() {
        None => default_radius_km,
        Some(raw) => {
            let radius: f64 = raw
                .parse()
                .map_err(|_| api_validation_error("maxDistance must be numeric"))?;
            if !radius.is_finite() || radius <= 0.0 {
                return Err(api_validation_error("maxDistance must be positive"));
            }
            radius
        }
    };
    Ok((origin, radius_km))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::WebcamLocation;
    use serde_json::Map;

    fn record_at(lat: f64, lon: f64) -> WebcamRecord {
        WebcamRecord {
            title: None,
            location: Some(WebcamLocation {
                latitude: Some(lat),
                longitude: Some(lon),
                city: None,
                country: None,
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }

    fn query(lat: Option<&str>, lon: Option<&str>, max_distance: Option<&str>) -> WebcamQuery {
        WebcamQuery {
            lat: lat.map(str::to_string),
            lon: lon.map(str::to_string),
            max_distance: max_distance.map(str::to_string),
        }
    }

    #[test]
    fn parse_query_requires_both_coordinates() {
        let err = parse_query(&query(None, Some("2.35"), None), 100.0).unwrap_err();
        assert_eq!(err.body.code, "validation_error");
        let err = parse_query(&query(Some("48.85"), None, None), 100.0).unwrap_err();
        assert_eq!(err.body.code, "validation_error");
    }

    #[test]
    fn parse_query_rejects_non_numeric_input() {
        assert!(parse_query(&query(Some("north"), Some("2.35"), None), 100.0).is_err());
        assert!(parse_query(&query(Some("48.85"), Some("east"), None), 100.0).is_err());
        assert!(parse_query(&query(Some("48.85"), Some("2.35"), Some("wide")), 100.0).is_err());
    }

    #[test]
    fn parse_query_rejects_out_of_range_coordinates() {
        assert!(parse_query(&query(Some("91"), Some("0"), None), 100.0).is_err());
        assert!(parse_query(&query(Some("0"), Some("181"), None), 100.0).is_err());
    }

    #[test]
    fn parse_query_applies_default_radius() {
        let (origin, radius) =
            parse_query(&query(Some("48.8566"), Some("2.3522"), None), 100.0).expect("parse");
        assert_eq!(origin, Coordinate::new(48.8566, 2.3522));
        assert_eq!(radius, 100.0);

        let (_, radius) =
            parse_query(&query(Some("48.8566"), Some("2.3522"), Some("10")), 100.0).expect("parse");
        assert_eq!(radius, 10.0);
    }

    #[test]
    fn within_radius_drops_unusable_locations() {
        let origin = Coordinate::new(48.8566, 2.3522);
        let mut no_location = record_at(0.0, 0.0);
        no_location.location = None;
        assert!(!within_radius(&no_location, origin, 100.0));

        let mut partial = record_at(48.86, 2.35);
        partial.location.as_mut().unwrap().longitude = None;
        assert!(!within_radius(&partial, origin, 100.0));
    }

    #[test]
    fn within_radius_compares_haversine_distance() {
        let origin = Coordinate::new(48.8566, 2.3522);
        // Eiffel Tower, ~4 km from Notre-Dame.
        assert!(within_radius(&record_at(48.8584, 2.2945), origin, 10.0));
        // Versailles, ~17 km out.
        assert!(!within_radius(&record_at(48.8049, 2.1204), origin, 10.0));
    }
}
