//! Property-based tests for the circle geometry.
//!
//! These tests verify:
//! - G1: the radius handle lies at the requested distance from the center
//! - G2: distance is zero for identical points and symmetric
//! - G3: moving the center then leaving the handle in place keeps the radius
//! - G4: handle drags never produce a non-positive radius

// Handle latitude and zero distance are exact, so bit-exact float comparison is intended.
#![allow(clippy::float_cmp)]

use geofence_core::geometry::{zoom_level_for_radius, CircleModel, GeoPoint};
use proptest::prelude::*;

fn relative_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected
}

// ============================================================================
// Fixed scenarios
// ============================================================================

/// The default Kiev circle places its handle about 0.001412° east.
#[test]
fn g1_kiev_default_handle() {
    let model = CircleModel::default();
    let kiev = GeoPoint::new(50.4501, 30.5234).unwrap();

    let handle = model.boundary_point(kiev, 100.0).unwrap();

    assert!((handle.longitude() - kiev.longitude() - 0.001_412).abs() < 1e-6);
    assert!(relative_error(model.radius_meters(kiev, handle), 100.0) < 0.01);
}

/// Documented zoom levels for typical radii.
#[test]
fn zoom_levels_for_documented_radii() {
    assert_eq!(zoom_level_for_radius(100.0), 18);
    assert_eq!(zoom_level_for_radius(500.0), 15);
    assert_eq!(zoom_level_for_radius(5_000.0), 12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: for |lat| < 89° and radii up to 5 km the handle lies within
    /// 1% of the requested radius.
    #[test]
    fn g1_handle_distance_matches_radius(
        lat in -88.99f64..88.99,
        lon in -180.0f64..=180.0,
        radius in 1.0f64..=5_000.0,
    ) {
        let model = CircleModel::default();
        let center = GeoPoint::new(lat, lon).unwrap();

        let handle = model.boundary_point(center, radius).unwrap();
        let measured = model.radius_meters(center, handle);

        prop_assert!(
            relative_error(measured, radius) < 0.01,
            "radius {} measured as {} at latitude {}",
            radius,
            measured,
            lat,
        );
        prop_assert_eq!(handle.latitude(), center.latitude());
    }

    /// Property: a point is at distance zero from itself.
    #[test]
    fn g2_distance_to_self_is_zero(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let model = CircleModel::default();
        let point = GeoPoint::new(lat, lon).unwrap();

        prop_assert_eq!(model.radius_meters(point, point), 0.0);
    }

    /// Property: distance does not depend on argument order.
    #[test]
    fn g2_distance_is_symmetric(
        lat1 in -90.0f64..=90.0,
        lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lon2 in -180.0f64..=180.0,
    ) {
        let model = CircleModel::default();
        let a = GeoPoint::new(lat1, lon1).unwrap();
        let b = GeoPoint::new(lat2, lon2).unwrap();

        let ab = model.radius_meters(a, b);
        let ba = model.radius_meters(b, a);

        prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    /// Property: dragging the center and then dropping the handle where it was
    /// auto-placed reproduces the radius.
    #[test]
    fn g3_center_then_handle_roundtrip(
        lat in -60.0f64..60.0,
        lon in -180.0f64..=180.0,
        new_lat in -88.0f64..88.0,
        new_lon in -180.0f64..=180.0,
        radius in 1.0f64..=5_000.0,
    ) {
        let model = CircleModel::default();
        let circle = model.circle(GeoPoint::new(lat, lon).unwrap(), radius).unwrap();

        let moved = model
            .on_center_moved(&circle, GeoPoint::new(new_lat, new_lon).unwrap())
            .unwrap();
        let resized = model.on_boundary_handle_moved(&moved, moved.boundary_handle());

        prop_assert_eq!(resized.center(), moved.center());
        prop_assert!(relative_error(resized.radius_meters(), radius) < 0.01);
    }

    /// Property: whatever the handle position, the radius stays positive and
    /// the center is inside the circle.
    #[test]
    fn g4_handle_drag_keeps_radius_positive(
        lat in -80.0f64..80.0,
        lon in -180.0f64..=180.0,
        handle_lat in -90.0f64..=90.0,
        handle_lon in -180.0f64..=180.0,
    ) {
        let model = CircleModel::default();
        let circle = model.circle(GeoPoint::new(lat, lon).unwrap(), 100.0).unwrap();

        let resized = model.on_boundary_handle_moved(
            &circle,
            GeoPoint::new(handle_lat, handle_lon).unwrap(),
        );

        prop_assert!(resized.radius_meters() >= model.min_radius_meters());
        prop_assert!(model.contains(&resized, resized.center()));
    }

    /// Property: the zoom level never increases as the radius grows.
    #[test]
    fn zoom_is_monotonic(radius in 1.0f64..1_000_000.0, factor in 1.0f64..100.0) {
        prop_assert!(zoom_level_for_radius(radius * factor) <= zoom_level_for_radius(radius));
    }
}
