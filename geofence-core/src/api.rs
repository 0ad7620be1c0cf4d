//! Entry point a host screen drives.

use log::{debug, info, warn};
use rand::Rng;

use crate::geofence::{
    random_test_location, GeofenceConfig, GeofenceData, GeofenceError, GeofenceRegistrar,
    GeofenceRequest, GeofenceStatus, GeofenceTransition, MockLocation, Result,
    GEOFENCE_REQUEST_ID,
};
use crate::geometry::{zoom_level_for_radius, CircleModel, GeoPoint, GeofenceCircle};

/// Core interface for the geofence editor.
///
/// Owns the single edited circle plus the state shown next to it: the
/// transition status, the Wi-Fi name and whether the geofence is registered.
/// Map events come in as plain points; the host re-renders from
/// [`GeofenceCore::circle`].
///
/// # Example
///
/// ```
/// use geofence_core::geofence::GeofenceConfig;
/// use geofence_core::geometry::GeoPoint;
/// use geofence_core::GeofenceCore;
///
/// let mut core = GeofenceCore::new(GeofenceConfig::default()).unwrap();
/// assert_eq!(core.circle().radius_meters(), 100.0);
/// assert_eq!(core.zoom_level(), 18);
///
/// core.move_center(GeoPoint::new(50.46, 30.53).unwrap()).unwrap();
/// assert_eq!(core.geofence_data().latitude, 50.46);
/// ```
#[derive(Debug, Clone)]
pub struct GeofenceCore {
    config: GeofenceConfig,
    model: CircleModel,
    circle: GeofenceCircle,
    status: GeofenceStatus,
    wifi_name: Option<String>,
    registered: bool,
}

impl GeofenceCore {
    /// Creates a core with the default circle from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if [`GeofenceConfig::validate`] rejects `config` or the
    /// default center lies beyond the handle limit.
    pub fn new(config: GeofenceConfig) -> Result<Self> {
        let model = config.circle_model()?;
        let circle = model.circle(config.default_center, config.default_radius_meters)?;
        Ok(Self {
            config,
            model,
            circle,
            status: GeofenceStatus::Unknown,
            wifi_name: None,
            registered: false,
        })
    }

    /// The circle as it should currently be rendered.
    #[must_use]
    pub const fn circle(&self) -> GeofenceCircle {
        self.circle
    }

    /// Geometry parameters in use.
    #[must_use]
    pub const fn model(&self) -> &CircleModel {
        &self.model
    }

    /// Configuration this core was created with.
    #[must_use]
    pub const fn config(&self) -> &GeofenceConfig {
        &self.config
    }

    /// Current transition status.
    #[must_use]
    pub const fn status(&self) -> GeofenceStatus {
        self.status
    }

    /// Whether the geofence is registered with the platform service.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    /// Wi-Fi network tied to the geofence.
    #[must_use]
    pub fn wifi_name(&self) -> Option<&str> {
        self.wifi_name.as_deref()
    }

    /// Sets or clears the Wi-Fi network tied to the geofence.
    pub fn set_wifi_name(&mut self, wifi_name: Option<String>) {
        self.wifi_name = wifi_name;
    }

    /// Handles a drag of the center marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the new center is too close to a pole; the
    /// circle is left unchanged.
    pub fn move_center(&mut self, new_center: GeoPoint) -> Result<GeofenceCircle> {
        self.circle = self.model.on_center_moved(&self.circle, new_center)?;
        Ok(self.circle)
    }

    /// Handles a drag of the radius handle.
    pub fn move_boundary_handle(&mut self, new_handle: GeoPoint) -> GeofenceCircle {
        self.circle = self.model.on_boundary_handle_moved(&self.circle, new_handle);
        self.circle
    }

    /// Zoom level that keeps the current circle on screen.
    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        zoom_level_for_radius(self.circle.radius_meters())
    }

    /// The current geofence as a transfer record.
    #[must_use]
    pub fn geofence_data(&self) -> GeofenceData {
        GeofenceData::from_circle(&self.circle, self.wifi_name.clone())
    }

    /// Replaces center, radius and Wi-Fi name from an external record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's center or radius is invalid; nothing
    /// is changed in that case.
    pub fn apply_geofence_data(&mut self, data: &GeofenceData) -> Result<GeofenceCircle> {
        let center = data.center()?;
        self.circle = self.model.circle(center, data.radius)?;
        self.wifi_name.clone_from(&data.wifi_name);
        debug!("Applied external geofence with radius {} m", data.radius);
        Ok(self.circle)
    }

    /// Registers the current geofence with the platform service.
    ///
    /// Registering again replaces the previous registration.
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the request.
    pub fn start_geofencing(&mut self, registrar: &mut dyn GeofenceRegistrar) -> Result<()> {
        let request = GeofenceRequest::new(self.geofence_data());
        registrar.register(&request)?;
        self.registered = true;
        info!(
            "Registered geofence {} with radius {} m",
            request.request_id, request.data.radius
        );
        Ok(())
    }

    /// Turns mock locations off, removes the geofence and resets the status.
    ///
    /// If the service fails partway, the geofence still counts as registered
    /// and the status is kept. Mock locations may already be off. Calling this
    /// again retries both steps.
    ///
    /// # Errors
    ///
    /// Returns [`GeofenceError::NotRegistered`] if nothing is registered, or
    /// the service's error if disabling mock locations or removal fails.
    pub fn stop_geofencing(&mut self, registrar: &mut dyn GeofenceRegistrar) -> Result<()> {
        if !self.registered {
            return Err(GeofenceError::NotRegistered);
        }
        registrar.disable_mock_location()?;
        registrar.remove(GEOFENCE_REQUEST_ID)?;
        self.registered = false;
        self.status = GeofenceStatus::Unknown;
        info!("Removed geofence {GEOFENCE_REQUEST_ID}");
        Ok(())
    }

    /// Applies a transition code delivered by the platform service.
    ///
    /// Enter and exit set the status; other codes make it unknown. Negative
    /// codes mean the notification carried no transition and are ignored.
    pub fn on_transition_code(&mut self, code: i32) -> GeofenceStatus {
        if code < 0 {
            return self.status;
        }
        let transition = GeofenceTransition::from_code(code);
        if transition.is_none() {
            warn!("Unrecognized geofence transition code {code}");
        }
        self.status = GeofenceStatus::after(transition);
        self.status
    }

    /// Where `point` falls relative to the current circle.
    #[must_use]
    pub fn expected_status(&self, point: GeoPoint) -> GeofenceStatus {
        if self.model.contains(&self.circle, point) {
            GeofenceStatus::Inside
        } else {
            GeofenceStatus::Outside
        }
    }

    /// Generates a random mock location near the default center and feeds it
    /// to the platform service.
    ///
    /// Returns the location together with where it falls relative to the
    /// circle, which the service should eventually report as a transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured spread is invalid or the service
    /// rejects the mock location.
    pub fn simulate_location<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        registrar: &mut dyn GeofenceRegistrar,
    ) -> Result<(MockLocation, GeofenceStatus)> {
        let location = random_test_location(
            rng,
            self.config.default_center,
            self.config.mock_spread_degrees,
            self.config.mock_accuracy_meters,
        )?;
        registrar.set_mock_location(&location)?;
        let expected = self.expected_status(location.position);
        debug!(
            "Mock location ({}, {}) is {}",
            location.position.latitude(),
            location.position.longitude(),
            expected.as_str()
        );
        Ok((location, expected))
    }
}
