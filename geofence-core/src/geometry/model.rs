//! Circle and radius-handle geometry.
//!
//! The radius handle is placed with the equirectangular small-angle
//! approximation, and the radius implied by a dragged handle is measured
//! with the haversine formula on a sphere. Both use the same Earth radius,
//! so the two stay consistent for radii up to a few kilometers.

use log::{debug, warn};

use super::circle::GeofenceCircle;
use super::error::{GeometryError, Result};
use super::point::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_009.0;

/// Smallest radius a handle drag can produce, in meters.
pub const DEFAULT_MIN_RADIUS_METERS: f64 = 1.0;

/// Largest absolute center latitude at which a handle can be placed.
pub const DEFAULT_MAX_HANDLE_LATITUDE: f64 = 89.9;

/// Geometry parameters for circles and handles.
///
/// Stateless: every method is a pure function of its inputs. Build one from
/// [`GeofenceConfig`](crate::geofence::GeofenceConfig) or use the default.
///
/// # Example
///
/// ```
/// use geofence_core::geometry::{CircleModel, GeoPoint};
///
/// let model = CircleModel::default();
/// let kiev = GeoPoint::new(50.4501, 30.5234).unwrap();
///
/// let handle = model.boundary_point(kiev, 100.0).unwrap();
/// let radius = model.radius_meters(kiev, handle);
/// assert!((radius - 100.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleModel {
    earth_radius_meters: f64,
    min_radius_meters: f64,
    max_handle_latitude: f64,
}

impl Default for CircleModel {
    fn default() -> Self {
        Self {
            earth_radius_meters: EARTH_RADIUS_METERS,
            min_radius_meters: DEFAULT_MIN_RADIUS_METERS,
            max_handle_latitude: DEFAULT_MAX_HANDLE_LATITUDE,
        }
    }
}

impl CircleModel {
    /// Creates a model with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] if the Earth radius or the
    /// minimum radius is not strictly positive, and
    /// [`GeometryError::InvalidLatitude`] if the handle limit is not in `0..90`.
    pub fn new(
        earth_radius_meters: f64,
        min_radius_meters: f64,
        max_handle_latitude: f64,
    ) -> Result<Self> {
        ensure_positive(earth_radius_meters)?;
        ensure_positive(min_radius_meters)?;
        if !max_handle_latitude.is_finite() || !(0.0..90.0).contains(&max_handle_latitude) {
            return Err(GeometryError::InvalidLatitude(max_handle_latitude));
        }
        Ok(Self {
            earth_radius_meters,
            min_radius_meters,
            max_handle_latitude,
        })
    }

    /// Earth radius used by this model, in meters.
    #[must_use]
    pub const fn earth_radius_meters(&self) -> f64 {
        self.earth_radius_meters
    }

    /// Smallest radius a handle drag can produce, in meters.
    #[must_use]
    pub const fn min_radius_meters(&self) -> f64 {
        self.min_radius_meters
    }

    /// Largest absolute latitude at which a handle can be placed.
    #[must_use]
    pub const fn max_handle_latitude(&self) -> f64 {
        self.max_handle_latitude
    }

    /// Builds a circle with its handle due east of the center.
    ///
    /// # Errors
    ///
    /// Same as [`CircleModel::boundary_point`].
    pub fn circle(&self, center: GeoPoint, radius_meters: f64) -> Result<GeofenceCircle> {
        let handle = self.boundary_point(center, radius_meters)?;
        Ok(GeofenceCircle::from_parts(center, radius_meters, handle))
    }

    /// Returns the point roughly `radius_meters` due east of `center`.
    ///
    /// Uses `Δlon = degrees(r / R) / cos(lat)`. The longitude is wrapped when
    /// the handle crosses the antimeridian.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidRadius`] if the radius is not finite or ≤ 0
    /// - [`GeometryError::PolarCenter`] if `|center.latitude|` exceeds the
    ///   handle limit, where `cos(lat)` approaches zero
    ///
    /// # Example
    ///
    /// ```
    /// use geofence_core::geometry::{CircleModel, GeoPoint};
    ///
    /// let model = CircleModel::default();
    /// let center = GeoPoint::new(50.4501, 30.5234).unwrap();
    /// let handle = model.boundary_point(center, 100.0).unwrap();
    ///
    /// assert_eq!(handle.latitude(), center.latitude());
    /// assert!((handle.longitude() - 30.524_812).abs() < 1e-5);
    /// ```
    pub fn boundary_point(&self, center: GeoPoint, radius_meters: f64) -> Result<GeoPoint> {
        ensure_positive(radius_meters)?;
        let latitude = center.latitude();
        if latitude.abs() > self.max_handle_latitude {
            warn!(
                "Refusing to place radius handle at latitude {latitude} (limit ±{})",
                self.max_handle_latitude
            );
            return Err(GeometryError::PolarCenter {
                latitude,
                limit: self.max_handle_latitude,
            });
        }

        let delta_longitude =
            (radius_meters / self.earth_radius_meters).to_degrees() / latitude.to_radians().cos();
        GeoPoint::with_wrapped_longitude(latitude, center.longitude() + delta_longitude)
    }

    /// Great-circle distance between two points, in meters.
    ///
    /// Haversine formula on a sphere of [`CircleModel::earth_radius_meters`].
    /// Symmetric in its arguments and exactly zero for identical points.
    #[must_use]
    pub fn radius_meters(&self, center: GeoPoint, boundary: GeoPoint) -> f64 {
        let lat1 = center.latitude().to_radians();
        let lat2 = boundary.latitude().to_radians();
        let delta_lat = (boundary.latitude() - center.latitude()).to_radians();
        let delta_lon = (boundary.longitude() - center.longitude()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // Rounding can push `a` a hair above 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.earth_radius_meters * c
    }

    /// Moves the circle to `new_center`, keeping its radius.
    ///
    /// The handle is re-placed due east of the new center.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PolarCenter`] if the new center is beyond the
    /// handle limit. The input circle is left for the caller to keep.
    pub fn on_center_moved(
        &self,
        circle: &GeofenceCircle,
        new_center: GeoPoint,
    ) -> Result<GeofenceCircle> {
        let moved = self.circle(new_center, circle.radius_meters())?;
        debug!(
            "Center moved to ({}, {})",
            new_center.latitude(),
            new_center.longitude()
        );
        Ok(moved)
    }

    /// Resizes the circle so its boundary passes through `new_handle`.
    ///
    /// The center is unchanged and the handle stays where it was dropped.
    /// A handle dropped on (or next to) the center yields the minimum radius.
    #[must_use]
    pub fn on_boundary_handle_moved(
        &self,
        circle: &GeofenceCircle,
        new_handle: GeoPoint,
    ) -> GeofenceCircle {
        let measured = self.radius_meters(circle.center(), new_handle);
        let radius = if measured < self.min_radius_meters {
            warn!(
                "Handle radius {measured} m below minimum, using {} m",
                self.min_radius_meters
            );
            self.min_radius_meters
        } else {
            measured
        };
        debug!("Radius handle moved, radius now {radius} m");
        GeofenceCircle::from_parts(circle.center(), radius, new_handle)
    }

    /// Whether `point` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, circle: &GeofenceCircle, point: GeoPoint) -> bool {
        self.radius_meters(circle.center(), point) <= circle.radius_meters()
    }
}

fn ensure_positive(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius(value))
    }
}
