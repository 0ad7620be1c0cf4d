//! API bridging layer that exposes geofence-core functionality.

use flutter_rust_bridge::frb;
use geofence_core::geofence::{GeofenceConfig, GeofenceData};
use geofence_core::geometry::GeoPoint;

/// Geofence editor driven by the map screen (wrapper around `GeofenceCore`).
///
/// Drag callbacks take raw latitude/longitude; errors cross the bridge as
/// strings.
#[derive(Debug)]
#[frb(opaque)]
pub struct GeofenceEditor {
    inner: geofence_core::GeofenceCore,
}

impl GeofenceEditor {
    /// Creates an editor with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the default circle cannot be built.
    pub fn new() -> Result<Self, String> {
        Self::with_config_json("{}")
    }

    /// Creates an editor from a JSON configuration (missing fields use defaults).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes invalid geometry.
    pub fn with_config_json(json: &str) -> Result<Self, String> {
        let config = GeofenceConfig::from_json(json).map_err(|e| e.to_string())?;
        let inner = geofence_core::GeofenceCore::new(config).map_err(|e| e.to_string())?;
        Ok(Self { inner })
    }

    /// Gets the center latitude.
    #[frb(sync)]
    #[must_use]
    pub fn center_latitude(&self) -> f64 {
        self.inner.circle().center().latitude()
    }

    /// Gets the center longitude.
    #[frb(sync)]
    #[must_use]
    pub fn center_longitude(&self) -> f64 {
        self.inner.circle().center().longitude()
    }

    /// Gets the radius in meters.
    #[frb(sync)]
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.inner.circle().radius_meters()
    }

    /// Gets the radius handle latitude.
    #[frb(sync)]
    #[must_use]
    pub fn handle_latitude(&self) -> f64 {
        self.inner.circle().boundary_handle().latitude()
    }

    /// Gets the radius handle longitude.
    #[frb(sync)]
    #[must_use]
    pub fn handle_longitude(&self) -> f64 {
        self.inner.circle().boundary_handle().longitude()
    }

    /// Gets the zoom level for the current radius.
    #[frb(sync)]
    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.inner.zoom_level()
    }

    /// Handles a drag of the center marker.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid coordinates or a center too close to a pole.
    #[frb(sync)]
    pub fn on_center_moved(&mut self, latitude: f64, longitude: f64) -> Result<(), String> {
        let point = GeoPoint::new(latitude, longitude).map_err(|e| e.to_string())?;
        self.inner.move_center(point).map_err(|e| {
            log::warn!("Center drag rejected: {e}");
            e.to_string()
        })?;
        Ok(())
    }

    /// Handles a drag of the radius handle.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid coordinates.
    #[frb(sync)]
    pub fn on_boundary_handle_moved(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), String> {
        let point = GeoPoint::new(latitude, longitude).map_err(|e| e.to_string())?;
        self.inner.move_boundary_handle(point);
        Ok(())
    }

    /// Applies a transition code from the platform service and returns the
    /// status label to display.
    #[frb(sync)]
    pub fn on_transition(&mut self, code: i32) -> String {
        self.inner.on_transition_code(code).as_str().to_string()
    }

    /// Gets the status label to display.
    #[frb(sync)]
    #[must_use]
    pub fn status_label(&self) -> String {
        self.inner.status().as_str().to_string()
    }

    /// Sets or clears the Wi-Fi name tied to the geofence.
    #[frb(sync)]
    pub fn set_wifi_name(&mut self, wifi_name: Option<String>) {
        self.inner.set_wifi_name(wifi_name);
    }

    /// Exports the current geofence as JSON for storage or registration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[frb(sync)]
    pub fn geofence_json(&self) -> Result<String, String> {
        self.inner.geofence_data().to_json().map_err(|e| e.to_string())
    }

    /// Replaces the geofence from JSON produced by [`Self::geofence_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the geofence is invalid.
    #[frb(sync)]
    pub fn apply_geofence_json(&mut self, json: &str) -> Result<(), String> {
        let data = GeofenceData::from_json(json).map_err(|e| e.to_string())?;
        self.inner
            .apply_geofence_data(&data)
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
