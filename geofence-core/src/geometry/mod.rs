//! Geofence circle geometry.
//!
//! Keeps the two draggable handles of a map circle consistent:
//! - the radius handle position for a given center and radius
//! - the radius implied by a dragged radius handle
//! - a zoom level that keeps the circle on screen
//!
//! Everything here works on plain values; the map view owns the markers
//! and re-renders from the returned [`GeofenceCircle`].
//!
//! # Example Usage
//!
//! ```
//! use geofence_core::geometry::{CircleModel, GeoPoint};
//!
//! let model = CircleModel::default();
//! let circle = model.circle(GeoPoint::new(50.4501, 30.5234).unwrap(), 100.0).unwrap();
//!
//! // The user drags the center marker
//! let circle = model
//!     .on_center_moved(&circle, GeoPoint::new(50.46, 30.53).unwrap())
//!     .unwrap();
//! assert_eq!(circle.radius_meters(), 100.0);
//!
//! // The user drags the radius handle further out
//! let handle = model.boundary_point(circle.center(), 300.0).unwrap();
//! let circle = model.on_boundary_handle_moved(&circle, handle);
//! assert!((circle.radius_meters() - 300.0).abs() < 3.0);
//! ```

mod circle;
mod error;
mod model;
mod point;
mod zoom;

pub use circle::GeofenceCircle;
pub use error::{GeometryError, Result};
pub use model::{
    CircleModel, DEFAULT_MAX_HANDLE_LATITUDE, DEFAULT_MIN_RADIUS_METERS, EARTH_RADIUS_METERS,
};
pub use point::GeoPoint;
pub use zoom::{zoom_level_for_radius, FALLBACK_ZOOM_LEVEL};
