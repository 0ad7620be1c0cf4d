//! Error types for geofence application operations.
//!
//! This module defines errors that can occur around the geometry model:
//! invalid geometry, storage, serialization and registration failures.

use thiserror::Error;

use crate::geometry::GeometryError;

/// Error type for geofence operations.
#[derive(Error, Debug)]
pub enum GeofenceError {
    /// Geometry rejected the input.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database error from `SQLite`.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The registration service refused a request.
    #[error("Registration error: {0}")]
    Registration(String),

    /// Geofencing was stopped while nothing was registered.
    #[error("No geofence is registered")]
    NotRegistered,
}

/// Result type alias for geofence operations.
pub type Result<T> = std::result::Result<T, GeofenceError>;
