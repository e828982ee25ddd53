//! Great-circle distance and the distance-bounded candidate filter.

use serde::Serialize;
use thiserror::Error;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("coordinates must be finite numbers")]
    NotFinite,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor. Distance math downstream assumes finite, in-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Anything with a position and a category label can be radius-filtered.
pub trait Located {
    fn coordinates(&self) -> Coordinates;
    fn category(&self) -> &str;
}

/// A candidate augmented with its distance from the search origin.
#[derive(Debug, Clone, Serialize)]
pub struct WithDistance<T> {
    #[serde(flatten)]
    pub item: T,
    /// Kilometers.
    pub distance: f64,
}

/// Haversine great-circle distance in kilometers.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Candidates within `radius_km` of `origin`, nearest first, at most `limit`.
///
/// The optional category filter is an exact case-insensitive match applied
/// before distances are computed. Ties keep input order.
pub fn within_radius<T: Located + Clone>(
    origin: Coordinates,
    candidates: &[T],
    radius_km: f64,
    category: Option<&str>,
    limit: usize,
) -> Vec<WithDistance<T>> {
    let wanted = category.map(str::to_lowercase);
    let mut hits: Vec<WithDistance<T>> = candidates
        .iter()
        .filter(|c| {
            wanted
                .as_deref()
                .map_or(true, |wanted| c.category().to_lowercase() == wanted)
        })
        .map(|c| WithDistance {
            distance: haversine_km(origin, c.coordinates()),
            item: c.clone(),
        })
        .filter(|hit| hit.distance <= radius_km)
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits.truncate(limit);
    hits
}
