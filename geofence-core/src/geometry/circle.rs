//! The edited geofence circle.

use super::point::GeoPoint;

/// One user-edited geofence: a center, a radius and the radius handle.
///
/// Values are produced by [`CircleModel`](super::CircleModel), which keeps
/// the radius strictly positive and places the handle on the boundary.
/// After a handle drag the handle stays where it was dropped, so it can
/// sit north or south of the center as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceCircle {
    center: GeoPoint,
    radius_meters: f64,
    boundary_handle: GeoPoint,
}

impl GeofenceCircle {
    pub(crate) const fn from_parts(
        center: GeoPoint,
        radius_meters: f64,
        boundary_handle: GeoPoint,
    ) -> Self {
        Self {
            center,
            radius_meters,
            boundary_handle,
        }
    }

    /// Center of the circle.
    #[must_use]
    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    /// Radius in meters (always > 0).
    #[must_use]
    pub const fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Position of the draggable radius handle.
    #[must_use]
    pub const fn boundary_handle(&self) -> GeoPoint {
        self.boundary_handle
    }
}
