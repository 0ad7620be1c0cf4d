//! Geographic point type.

use serde::{Deserialize, Serialize};

use super::error::{GeometryError, Result};

/// A latitude/longitude pair in degrees.
///
/// Always holds finite coordinates with latitude in `-90..=90` and
/// longitude in `-180..=180`. Deserialization goes through the same
/// validation as [`GeoPoint::new`].
///
/// # Example
///
/// ```
/// use geofence_core::geometry::GeoPoint;
///
/// let kiev = GeoPoint::new(50.4501, 30.5234).unwrap();
/// assert_eq!(kiev.latitude(), 50.4501);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = GeometryError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Creates a point after validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLatitude`] or
    /// [`GeometryError::InvalidLongitude`] for non-finite or out-of-range input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeometryError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeometryError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a point from coordinates known to be valid.
    pub(crate) const fn from_valid(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a point, wrapping the longitude into `-180..180`.
    ///
    /// Used for computed positions that may cross the antimeridian.
    ///
    /// # Errors
    ///
    /// Returns an error if the latitude is invalid or the longitude is not finite.
    pub fn with_wrapped_longitude(latitude: f64, longitude: f64) -> Result<Self> {
        if !longitude.is_finite() {
            return Err(GeometryError::InvalidLongitude(longitude));
        }
        Self::new(latitude, wrap_longitude(longitude))
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Wraps a longitude into `-180..180`; values already in range are untouched.
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_boundaries() {
        assert!(GeoPoint::new(90.0, 0.0).is_ok());
        assert!(GeoPoint::new(-90.0, 0.0).is_ok());
        assert!(GeoPoint::new(0.0, 180.0).is_ok());
        assert!(GeoPoint::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            GeoPoint::new(90.5, 0.0),
            Err(GeometryError::InvalidLatitude(90.5))
        );
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert_eq!(
            GeoPoint::new(0.0, 181.0),
            Err(GeometryError::InvalidLongitude(181.0))
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::with_wrapped_longitude(0.0, f64::NAN).is_err());
    }

    #[test]
    fn wraps_longitude_past_antimeridian() {
        let point = GeoPoint::with_wrapped_longitude(10.0, 181.5).unwrap();
        assert!((point.longitude() - -178.5).abs() < 1e-9);

        let point = GeoPoint::with_wrapped_longitude(10.0, -190.0).unwrap();
        assert!((point.longitude() - 170.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_in_range_longitude_exact() {
        let point = GeoPoint::with_wrapped_longitude(10.0, 30.524_812).unwrap();
        assert_eq!(point.longitude(), 30.524_812);
    }

    #[test]
    fn deserialization_validates() {
        let ok: GeoPoint = serde_json::from_str(r#"{"latitude":1.5,"longitude":2.5}"#).unwrap();
        assert_eq!(ok, GeoPoint::new(1.5, 2.5).unwrap());

        let bad = serde_json::from_str::<GeoPoint>(r#"{"latitude":95.0,"longitude":2.5}"#);
        assert!(bad.is_err());
    }
}
