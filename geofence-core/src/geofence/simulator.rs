//! Mock location generation for exercising the geofence by hand.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::ensure_non_negative;
use super::error::Result;
use crate::geometry::GeoPoint;

/// Provider name attached to generated locations.
pub const MOCK_PROVIDER: &str = "network";

/// A synthetic position fed to the map and the geofencing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockLocation {
    /// Simulated position.
    pub position: GeoPoint,

    /// Reported horizontal accuracy in meters.
    pub accuracy_meters: f64,

    /// Location provider the position claims to come from.
    pub provider: String,

    /// When the location was generated (UTC).
    pub timestamp: DateTime<Utc>,
}

impl MockLocation {
    /// Creates a mock location stamped with the current time.
    #[must_use]
    pub fn new(position: GeoPoint, accuracy_meters: f64) -> Self {
        Self {
            position,
            accuracy_meters,
            provider: MOCK_PROVIDER.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Generates a random location up to `spread_degrees` north and east of `origin`.
///
/// Latitude is capped at the north pole and longitude wraps across the
/// antimeridian, so any origin yields a valid point.
///
/// # Errors
///
/// Returns [`GeofenceError::InvalidConfig`](super::GeofenceError::InvalidConfig)
/// if `spread_degrees` or `accuracy_meters` is negative or not finite.
///
/// # Example
///
/// ```
/// use geofence_core::geofence::random_test_location;
/// use geofence_core::geometry::GeoPoint;
///
/// let origin = GeoPoint::new(50.4501, 30.5234).unwrap();
/// let location = random_test_location(&mut rand::thread_rng(), origin, 0.1, 3.0).unwrap();
///
/// assert!(location.position.latitude() >= origin.latitude());
/// assert!(location.position.latitude() < origin.latitude() + 0.1);
/// assert_eq!(location.accuracy_meters, 3.0);
/// ```
pub fn random_test_location<R: Rng + ?Sized>(
    rng: &mut R,
    origin: GeoPoint,
    spread_degrees: f64,
    accuracy_meters: f64,
) -> Result<MockLocation> {
    ensure_non_negative("mock spread", spread_degrees)?;
    ensure_non_negative("mock accuracy", accuracy_meters)?;
    let latitude = rng
        .gen::<f64>()
        .mul_add(spread_degrees, origin.latitude())
        .min(90.0);
    let longitude = rng.gen::<f64>().mul_add(spread_degrees, origin.longitude());
    let position = GeoPoint::with_wrapped_longitude(latitude, longitude)?;
    Ok(MockLocation::new(position, accuracy_meters))
}
