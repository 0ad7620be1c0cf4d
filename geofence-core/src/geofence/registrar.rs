//! Interface to the platform geofencing service.
//!
//! The service itself (registration, background transition detection,
//! mock-location injection) lives in the host. The core only describes what
//! it asks of it.

use super::data::GeofenceData;
use super::error::Result;
use super::simulator::MockLocation;

/// Request id used for the single geofence this editor manages.
pub const GEOFENCE_REQUEST_ID: &str = "GEOFENCE_CIRCLE";

/// A geofence registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceRequest {
    /// Identifier the service reports transitions under.
    pub request_id: String,
    /// Center and radius to monitor.
    pub data: GeofenceData,
}

impl GeofenceRequest {
    /// Creates a request for the editor's geofence.
    #[must_use]
    pub fn new(data: GeofenceData) -> Self {
        Self {
            request_id: GEOFENCE_REQUEST_ID.to_string(),
            data,
        }
    }
}

/// Platform geofencing and mock-location service.
pub trait GeofenceRegistrar {
    /// Starts monitoring enter/exit transitions for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the request.
    fn register(&mut self, request: &GeofenceRequest) -> Result<()>;

    /// Stops monitoring the geofence registered under `request_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service fails to remove it.
    fn remove(&mut self, request_id: &str) -> Result<()>;

    /// Feeds a synthetic position to the location provider.
    ///
    /// # Errors
    ///
    /// Returns an error if mock locations are not available.
    fn set_mock_location(&mut self, location: &MockLocation) -> Result<()>;

    /// Turns mock locations off again.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reset.
    fn disable_mock_location(&mut self) -> Result<()>;
}
