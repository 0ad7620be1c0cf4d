//! Error types for the circle geometry.

use thiserror::Error;

/// Error type for geometry operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Latitude is not finite or outside -90..=90.
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude is not finite or outside -180..=180.
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// Radius is not finite or not strictly positive.
    #[error("Invalid radius: {0} m")]
    InvalidRadius(f64),

    /// Center is too close to a pole to place the radius handle.
    #[error("Center latitude {latitude} is beyond the handle limit of ±{limit}")]
    PolarCenter {
        /// Latitude of the rejected center.
        latitude: f64,
        /// Configured maximum absolute latitude.
        limit: f64,
    },
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
