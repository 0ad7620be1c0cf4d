//! Integration tests for the geofence editor.
//!
//! These tests drive `GeofenceCore` the way a map screen does:
//! - drag callbacks for the center and radius handle
//! - start/stop geofencing against a fake platform service
//! - mock locations and transition codes
//! - persisting and restoring the edited geofence with `GeofenceStorage`

mod helpers;

use geofence_core::geofence::{GeofenceConfig, GeofenceData, GeofenceStatus, GeofenceStorage};
use geofence_core::geometry::GeoPoint;
use geofence_core::GeofenceCore;
use rand::rngs::StdRng;
use rand::SeedableRng;

use helpers::FakeRegistrar;

fn new_core() -> GeofenceCore {
    GeofenceCore::new(GeofenceConfig::default()).expect("default config is valid")
}

#[test]
fn drag_session_keeps_handle_consistent() {
    let mut core = new_core();
    let model = *core.model();

    // Grow the circle by dragging the handle out to ~300 m
    let handle = model.boundary_point(core.circle().center(), 300.0).unwrap();
    core.move_boundary_handle(handle);
    let radius = core.circle().radius_meters();
    assert!((radius - 300.0).abs() < 3.0);

    // Moving the center carries the radius along and re-places the handle
    let moved = core
        .move_center(GeoPoint::new(50.4600, 30.5300).unwrap())
        .unwrap();
    assert_eq!(moved.radius_meters(), radius);
    let handle_distance = model.radius_meters(moved.center(), moved.boundary_handle());
    assert!((handle_distance - radius).abs() / radius < 0.01);

    // Zoom follows the radius
    assert_eq!(core.zoom_level(), 16);
}

#[test]
fn geofencing_lifecycle() {
    let mut core = new_core();
    let mut registrar = FakeRegistrar::default();
    core.set_wifi_name(Some("office".to_string()));

    core.start_geofencing(&mut registrar).unwrap();
    let active = registrar.active.clone().expect("geofence registered");
    assert_eq!(active.request_id, "GEOFENCE_CIRCLE");
    assert_eq!(active.data.wifi_name.as_deref(), Some("office"));

    let mut rng = StdRng::seed_from_u64(2024);
    let (location, _) = core.simulate_location(&mut rng, &mut registrar).unwrap();
    assert_eq!(registrar.mock_location, Some(location));
    assert!(registrar.mock_enabled);

    assert_eq!(core.on_transition_code(1), GeofenceStatus::Inside);
    assert_eq!(core.status().as_str(), "inside");
    assert_eq!(core.on_transition_code(2), GeofenceStatus::Outside);

    core.stop_geofencing(&mut registrar).unwrap();
    assert!(registrar.active.is_none());
    assert!(!registrar.mock_enabled);
    assert_eq!(core.status(), GeofenceStatus::Unknown);
    assert_eq!(
        registrar.calls,
        vec![
            "register",
            "set_mock_location",
            "disable_mock_location",
            "remove"
        ]
    );
}

#[test]
fn re_registering_after_edit_sends_new_radius() {
    let mut core = new_core();
    let mut registrar = FakeRegistrar::default();
    core.start_geofencing(&mut registrar).unwrap();

    let handle = core
        .model()
        .boundary_point(core.circle().center(), 1_000.0)
        .unwrap();
    core.move_boundary_handle(handle);
    core.start_geofencing(&mut registrar).unwrap();

    let active = registrar.active.expect("geofence registered");
    assert!((active.data.radius - 1_000.0).abs() < 10.0);
}

#[test]
fn storage_persists_geofence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geofence.db");

    let mut core = new_core();
    core.move_center(GeoPoint::new(48.8566, 2.3522).unwrap()).unwrap();
    core.set_wifi_name(Some("paris".to_string()));
    let saved = core.geofence_data();

    {
        let storage = GeofenceStorage::new(&path).unwrap();
        storage.save_geofence(&saved).unwrap();
        storage.set_geofences_added(true).unwrap();
    }

    let storage = GeofenceStorage::new(&path).unwrap();
    let loaded = storage.load_geofence().unwrap().expect("geofence saved");
    assert_eq!(loaded, saved);
    assert!(storage.geofences_added().unwrap());

    let mut restored = new_core();
    restored.apply_geofence_data(&loaded).unwrap();
    assert_eq!(restored.circle(), core.circle());
    assert_eq!(restored.wifi_name(), Some("paris"));
}

#[test]
fn in_memory_storage_roundtrip() {
    let storage = GeofenceStorage::in_memory().unwrap();
    let data = GeofenceData {
        latitude: -33.8688,
        longitude: 151.2093,
        wifi_name: None,
        radius: 42.0,
    };

    storage.save_geofence(&data).unwrap();
    assert_eq!(storage.load_geofence().unwrap(), Some(data));
}

#[test]
fn custom_config_changes_defaults() {
    let config = GeofenceConfig::from_json(
        r#"{"default_center": {"latitude": 40.7128, "longitude": -74.0060},
            "default_radius_meters": 500.0}"#,
    )
    .unwrap();

    let core = GeofenceCore::new(config).unwrap();

    assert_eq!(core.circle().center().latitude(), 40.7128);
    assert_eq!(core.circle().radius_meters(), 500.0);
    assert_eq!(core.zoom_level(), 15);
}
