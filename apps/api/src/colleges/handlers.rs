//! Axum route handlers for the nearby-colleges API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::colleges::catalog::College;
use crate::colleges::radius::{within_radius, Coordinates, WithDistance};
use crate::errors::AppError;
use crate::state::AppState;

pub const DEFAULT_RADIUS_KM: f64 = 100.0;
pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct CollegeSearchRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
    pub limit: Option<usize>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CollegeSearchResponse {
    pub colleges: Vec<WithDistance<College>>,
    pub total: usize,
    pub user_location: Coordinates,
    pub search_radius: f64,
}

/// GET /api/v1/colleges?latitude=&longitude=&radius=&limit=&type=
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    Query(req): Query<CollegeSearchRequest>,
) -> Result<Json<CollegeSearchResponse>, AppError> {
    search_colleges(&state, req).map(Json)
}

/// POST /api/v1/colleges
pub async fn handle_search_colleges(
    State(state): State<AppState>,
    Json(req): Json<CollegeSearchRequest>,
) -> Result<Json<CollegeSearchResponse>, AppError> {
    search_colleges(&state, req).map(Json)
}

fn search_colleges(
    state: &AppState,
    req: CollegeSearchRequest,
) -> Result<CollegeSearchResponse, AppError> {
    let origin = origin_from(&req)?;
    let radius = req.radius.unwrap_or(DEFAULT_RADIUS_KM);
    if !radius.is_finite() || radius < 0.0 {
        return Err(AppError::Validation(
            "radius must be a non-negative number of kilometers".to_string(),
        ));
    }

    let type_filter = req
        .college_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let colleges = within_radius(
        origin,
        state.colleges.as_slice(),
        radius,
        type_filter,
        req.limit.unwrap_or(DEFAULT_LIMIT),
    );

    info!(
        latitude = origin.latitude,
        longitude = origin.longitude,
        radius,
        found = colleges.len(),
        "college search"
    );

    Ok(CollegeSearchResponse {
        total: colleges.len(),
        colleges,
        user_location: origin,
        search_radius: radius,
    })
}

/// (0, 0) is what clients send when geolocation never resolved, so it counts as missing.
fn origin_from(req: &CollegeSearchRequest) -> Result<Coordinates, AppError> {
    let (latitude, longitude) = match (req.latitude, req.longitude) {
        (Some(lat), Some(lon)) if !(lat == 0.0 && lon == 0.0) => (lat, lon),
        _ => {
            return Err(AppError::Validation(
                "latitude and longitude are required".to_string(),
            ))
        }
    };
    Coordinates::new(latitude, longitude).map_err(|e| AppError::Validation(e.to_string()))
}
