use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use swasthya_core::models::facility::{Coordinates, Facility};
use swasthya_facilities::overpass::DEFAULT_RADIUS_M;
use swasthya_facilities::{nearest_with_live, parse_type_filter};

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on the search radius, in metres.
const MAX_RADIUS_M: u32 = 50_000;

#[derive(Deserialize)]
pub struct LocationQuery {
    lat: Option<String>,
    lng: Option<String>,
    radius: Option<String>,
    #[serde(rename = "type")]
    facility_type: Option<String>,
}

#[derive(Serialize)]
pub struct FacilitiesBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    facilities: Vec<Facility>,
}

fn parse_origin(query: &LocationQuery) -> Result<Coordinates, ApiError> {
    let (Some(lat), Some(lng)) = (query.lat.as_deref(), query.lng.as_deref()) else {
        return Err(ApiError::BadRequest("Missing lat/lng parameters".to_string()));
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid lat: {lat}")))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid lng: {lng}")))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(ApiError::BadRequest("lat/lng out of range".to_string()));
    }
    Ok(Coordinates { lat, lng })
}

fn parse_radius(raw: Option<&str>) -> Result<u32, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(DEFAULT_RADIUS_M);
    };
    match raw.parse::<u32>() {
        Ok(radius) if (1..=MAX_RADIUS_M).contains(&radius) => Ok(radius),
        _ => Err(ApiError::BadRequest(format!("invalid radius: {raw}"))),
    }
}

/// Live facilities around a point, straight from the geodata service.
pub async fn nearby(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let origin = parse_origin(&query)?;
    let radius = parse_radius(query.radius.as_deref())?;

    let result = match state.overpass.as_deref() {
        Some(client) => client.fetch_nearby(origin, radius).await,
        None => Ok(Vec::new()),
    };

    let response = match result {
        Ok(facilities) => Json(FacilitiesBody {
            error: None,
            facilities,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "error fetching facilities");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FacilitiesBody {
                    error: Some("Failed to fetch facilities".to_string()),
                    facilities: Vec::new(),
                }),
            )
                .into_response()
        }
    };
    Ok(response)
}

/// Static directory merged with live results, nearest first.
pub async fn nearest(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> Result<Json<FacilitiesBody>, ApiError> {
    let Query(query) = query?;
    let origin = parse_origin(&query)?;
    let radius = parse_radius(query.radius.as_deref())?;
    let filter = parse_type_filter(query.facility_type.as_deref())?;

    let facilities = nearest_with_live(state.overpass.as_deref(), origin, filter, radius).await;

    Ok(Json(FacilitiesBody {
        error: None,
        facilities,
    }))
}
