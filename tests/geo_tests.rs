use punchclock::core::geo::{evaluate, haversine_m};
use punchclock::errors::AppError;

const SITE_LAT: f64 = 43.6532;
const SITE_LON: f64 = -79.3832;

#[test]
fn haversine_is_symmetric() {
    let pairs = [
        (43.6532, -79.3832, 45.4215, -75.6972),
        (0.0, 0.0, 10.0, 10.0),
        (-33.8688, 151.2093, 51.5074, -0.1278),
    ];
    for (lat1, lon1, lat2, lon2) in pairs {
        let d1 = haversine_m(lat1, lon1, lat2, lon2);
        let d2 = haversine_m(lat2, lon2, lat1, lon1);
        assert!((d1 - d2).abs() < 1e-6, "asymmetric: {d1} vs {d2}");
    }
}

#[test]
fn haversine_zero_for_identical_points() {
    assert_eq!(haversine_m(SITE_LAT, SITE_LON, SITE_LAT, SITE_LON), 0.0);
}

#[test]
fn haversine_known_distance() {
    // ~0.0045° of latitude is ~500 m
    let d = haversine_m(43.6577, SITE_LON, SITE_LAT, SITE_LON);
    assert!((495.0..=506.0).contains(&d), "got {d}");
}

#[test]
fn point_at_exact_fence_radius_is_within() {
    let d = haversine_m(43.6577, SITE_LON, SITE_LAT, SITE_LON);

    let check = evaluate(
        SITE_LAT,
        SITE_LON,
        d,
        0.0,
        Some(43.6577),
        Some(SITE_LON),
        None,
    )
    .unwrap();
    assert!(check.within_fence);

    let check = evaluate(
        SITE_LAT,
        SITE_LON,
        d - 0.01,
        0.0,
        Some(43.6577),
        Some(SITE_LON),
        None,
    )
    .unwrap();
    assert!(!check.within_fence);
}

#[test]
fn disabled_fence_admits_any_distance() {
    let check = evaluate(
        SITE_LAT,
        SITE_LON,
        0.0,
        0.0,
        Some(-33.8688),
        Some(151.2093),
        None,
    )
    .unwrap();
    assert!(check.within_fence);
    assert!(check.distance_m > 1_000_000.0);
}

#[test]
fn non_finite_site_is_a_configuration_error() {
    let err = evaluate(f64::NAN, SITE_LON, 100.0, 0.0, Some(SITE_LAT), Some(SITE_LON), None)
        .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn missing_fix_is_rejected() {
    let err = evaluate(SITE_LAT, SITE_LON, 100.0, 0.0, None, Some(SITE_LON), None).unwrap_err();
    assert!(matches!(err, AppError::MissingLocation));

    let err = evaluate(
        SITE_LAT,
        SITE_LON,
        100.0,
        0.0,
        Some(f64::INFINITY),
        Some(SITE_LON),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::MissingLocation));
}

#[test]
fn poor_accuracy_is_rejected_when_limit_set() {
    let err = evaluate(
        SITE_LAT,
        SITE_LON,
        100.0,
        50.0,
        Some(SITE_LAT),
        Some(SITE_LON),
        Some(80.0),
    )
    .unwrap_err();
    match err {
        AppError::AccuracyTooLow { reported, limit } => {
            assert_eq!(reported, 80.0);
            assert_eq!(limit, 50.0);
        }
        other => panic!("expected AccuracyTooLow, got {other:?}"),
    }

    // limit disabled: the same accuracy passes
    let check = evaluate(
        SITE_LAT,
        SITE_LON,
        100.0,
        0.0,
        Some(SITE_LAT),
        Some(SITE_LON),
        Some(80.0),
    )
    .unwrap();
    assert!(check.within_fence);

    // no reported accuracy: nothing to check
    let check = evaluate(
        SITE_LAT,
        SITE_LON,
        100.0,
        50.0,
        Some(SITE_LAT),
        Some(SITE_LON),
        None,
    )
    .unwrap();
    assert!(check.within_fence);
}
