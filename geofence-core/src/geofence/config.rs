//! Geofence editor configuration.

use serde::{Deserialize, Serialize};

use super::error::{GeofenceError, Result};
use crate::geometry::{
    CircleModel, GeoPoint, DEFAULT_MAX_HANDLE_LATITUDE, DEFAULT_MIN_RADIUS_METERS,
    EARTH_RADIUS_METERS,
};

/// Center the editor starts from (Kiev).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::from_valid(50.4501, 30.5234);

/// Radius of a freshly created geofence, in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

/// Span of random mock locations, in degrees north and east of the center.
pub const DEFAULT_MOCK_SPREAD_DEGREES: f64 = 0.1;

/// Accuracy reported for mock locations, in meters.
pub const DEFAULT_MOCK_ACCURACY_METERS: f64 = 3.0;

/// Settings for the geofence editor.
///
/// Every field has a default, so partial JSON is accepted.
///
/// # Example
///
/// ```
/// use geofence_core::geofence::GeofenceConfig;
///
/// let config = GeofenceConfig::from_json(r#"{"default_radius_meters": 250.0}"#).unwrap();
/// assert_eq!(config.default_radius_meters, 250.0);
/// assert_eq!(config.earth_radius_meters, 6_371_009.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeofenceConfig {
    /// Sphere radius used for handle placement and distances.
    pub earth_radius_meters: f64,

    /// Center of the circle created when the map is ready.
    pub default_center: GeoPoint,

    /// Radius of the circle created when the map is ready.
    pub default_radius_meters: f64,

    /// Smallest radius a handle drag can produce.
    pub min_radius_meters: f64,

    /// Largest absolute center latitude where the radius handle can be placed.
    pub max_handle_latitude: f64,

    /// Span of random mock locations, in degrees.
    pub mock_spread_degrees: f64,

    /// Accuracy attached to mock locations, in meters.
    pub mock_accuracy_meters: f64,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            earth_radius_meters: EARTH_RADIUS_METERS,
            default_center: DEFAULT_CENTER,
            default_radius_meters: DEFAULT_RADIUS_METERS,
            min_radius_meters: DEFAULT_MIN_RADIUS_METERS,
            max_handle_latitude: DEFAULT_MAX_HANDLE_LATITUDE,
            mock_spread_degrees: DEFAULT_MOCK_SPREAD_DEGREES,
            mock_accuracy_meters: DEFAULT_MOCK_ACCURACY_METERS,
        }
    }
}

impl GeofenceConfig {
    /// Checks every field and returns the geometry model they describe.
    ///
    /// # Errors
    ///
    /// - [`GeofenceError::Geometry`] if the Earth radius, minimum radius or
    ///   handle limit is out of range
    /// - [`GeofenceError::InvalidConfig`] if the default radius is below the
    ///   minimum radius, or the mock spread or accuracy is negative or not finite
    pub fn validate(&self) -> Result<CircleModel> {
        let model = CircleModel::new(
            self.earth_radius_meters,
            self.min_radius_meters,
            self.max_handle_latitude,
        )?;
        if self.default_radius_meters.is_nan()
            || self.default_radius_meters < self.min_radius_meters
        {
            return Err(GeofenceError::InvalidConfig(format!(
                "default radius {} m is below the minimum radius {} m",
                self.default_radius_meters, self.min_radius_meters
            )));
        }
        ensure_non_negative("mock spread", self.mock_spread_degrees)?;
        ensure_non_negative("mock accuracy", self.mock_accuracy_meters)?;
        Ok(model)
    }

    /// Builds the geometry model described by this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GeofenceConfig::validate`].
    pub fn circle_model(&self) -> Result<CircleModel> {
        self.validate()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Rejects values that are negative or not finite.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeofenceError::InvalidConfig(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}
