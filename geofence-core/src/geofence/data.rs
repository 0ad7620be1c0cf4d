//! Geofence transfer record.

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::geometry::{GeoPoint, GeofenceCircle};

/// Plain geofence parameters exchanged with the host, storage and the
/// registration service.
///
/// Carries no invariants of its own; [`GeofenceData::center`] and
/// [`GeofenceCore::apply_geofence_data`](crate::GeofenceCore::apply_geofence_data)
/// validate when turning it back into geometry.
///
/// # Example
///
/// ```
/// use geofence_core::geofence::GeofenceData;
///
/// let json = r#"{"latitude":50.4501,"longitude":30.5234,"wifiName":"home","radius":120.0}"#;
/// let data = GeofenceData::from_json(json).unwrap();
/// assert_eq!(data.wifi_name.as_deref(), Some("home"));
/// assert_eq!(data.radius, 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceData {
    /// Center latitude in degrees.
    pub latitude: f64,

    /// Center longitude in degrees.
    pub longitude: f64,

    /// Wi-Fi network tied to this geofence, if any.
    #[serde(rename = "wifiName", default, skip_serializing_if = "Option::is_none")]
    pub wifi_name: Option<String>,

    /// Radius in meters.
    pub radius: f64,
}

impl GeofenceData {
    /// Captures the center and radius of `circle`.
    #[must_use]
    pub fn from_circle(circle: &GeofenceCircle, wifi_name: Option<String>) -> Self {
        let center = circle.center();
        Self {
            latitude: center.latitude(),
            longitude: center.longitude(),
            wifi_name,
            radius: circle.radius_meters(),
        }
    }

    /// Returns the validated center point.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored coordinates are out of range.
    pub fn center(&self) -> Result<GeoPoint> {
        Ok(GeoPoint::new(self.latitude, self.longitude)?)
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or missing required fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this record to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
