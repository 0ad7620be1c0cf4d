//! Application state around the circle geometry.
//!
//! # Types
//!
//! - [`GeofenceConfig`]: defaults and geometry parameters
//! - [`GeofenceData`]: transfer record exchanged with the host and storage
//! - [`GeofenceStatus`] / [`GeofenceTransition`]: enter/exit display state
//! - [`MockLocation`]: synthetic positions for manual testing
//! - [`GeofenceRegistrar`]: the platform geofencing service, implemented by the host
//! - [`GeofenceStorage`]: `SQLite` persistence of the last edited geofence

mod config;
mod data;
mod error;
mod registrar;
mod simulator;
mod storage;
mod transition;

pub use config::{
    GeofenceConfig, DEFAULT_CENTER, DEFAULT_MOCK_ACCURACY_METERS, DEFAULT_MOCK_SPREAD_DEGREES,
    DEFAULT_RADIUS_METERS,
};
pub use data::GeofenceData;
pub use error::{GeofenceError, Result};
pub use registrar::{GeofenceRegistrar, GeofenceRequest, GEOFENCE_REQUEST_ID};
pub use simulator::{random_test_location, MockLocation, MOCK_PROVIDER};
pub use storage::GeofenceStorage;
pub use transition::{GeofenceStatus, GeofenceTransition};
