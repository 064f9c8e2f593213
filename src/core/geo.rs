//! Geofence admission control: great-circle distance of a reported fix
//! from the configured work site, plus the accuracy gate.

use crate::errors::{AppError, AppResult};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Outcome of a geofence evaluation. `within_fence` is a verdict only;
/// rejection policy lives in the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCheck {
    pub distance_m: f64,
    pub within_fence: bool,
}

fn to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Great-circle distance in meters between two coordinates (haversine).
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = to_rad(lat2 - lat1);
    let d_lon = to_rad(lon2 - lon1);
    let a = (d_lat / 2.0).sin().powi(2)
        + to_rad(lat1).cos() * to_rad(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Evaluate a reported fix against the work-site geofence.
///
/// - Non-finite site coordinates are a fatal configuration error.
/// - A missing or non-finite fix is `MissingLocation`.
/// - With `min_accuracy_m > 0`, a reported accuracy above the limit is
///   `AccuracyTooLow`.
/// - `within_fence` is true when the fence is disabled (radius <= 0) or
///   the distance does not exceed the radius.
///
/// Pure function of its inputs; no side effects.
pub fn evaluate(
    site_lat: f64,
    site_lon: f64,
    fence_radius_m: f64,
    min_accuracy_m: f64,
    lat: Option<f64>,
    lon: Option<f64>,
    accuracy_m: Option<f64>,
) -> AppResult<GeoCheck> {
    if !site_lat.is_finite() || !site_lon.is_finite() {
        return Err(AppError::Config(
            "site latitude/longitude not set".to_string(),
        ));
    }

    let (lat, lon) = match (lat, lon) {
        (Some(la), Some(lo)) if la.is_finite() && lo.is_finite() => (la, lo),
        _ => return Err(AppError::MissingLocation),
    };

    if min_accuracy_m > 0.0
        && let Some(acc) = accuracy_m
        && acc > min_accuracy_m
    {
        return Err(AppError::AccuracyTooLow {
            reported: acc,
            limit: min_accuracy_m,
        });
    }

    let distance_m = haversine_m(lat, lon, site_lat, site_lon);
    let within_fence = fence_radius_m <= 0.0 || distance_m <= fence_radius_m;

    Ok(GeoCheck {
        distance_m,
        within_fence,
    })
}
