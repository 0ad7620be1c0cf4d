//! Reusable test helpers for geofence integration tests.

use geofence_core::geofence::{
    GeofenceError, GeofenceRegistrar, GeofenceRequest, MockLocation, Result,
};

/// In-process stand-in for the platform geofencing service.
///
/// Records every call and keeps the currently registered request, so tests
/// can assert on what the core asked for.
#[derive(Debug, Default)]
pub struct FakeRegistrar {
    pub active: Option<GeofenceRequest>,
    pub mock_location: Option<MockLocation>,
    pub mock_enabled: bool,
    pub calls: Vec<&'static str>,
}

impl GeofenceRegistrar for FakeRegistrar {
    fn register(&mut self, request: &GeofenceRequest) -> Result<()> {
        self.calls.push("register");
        self.active = Some(request.clone());
        Ok(())
    }

    fn remove(&mut self, request_id: &str) -> Result<()> {
        self.calls.push("remove");
        match &self.active {
            Some(active) if active.request_id == request_id => {
                self.active = None;
                Ok(())
            }
            _ => Err(GeofenceError::Registration(format!(
                "unknown request id {request_id}"
            ))),
        }
    }

    fn set_mock_location(&mut self, location: &MockLocation) -> Result<()> {
        self.calls.push("set_mock_location");
        self.mock_location = Some(location.clone());
        self.mock_enabled = true;
        Ok(())
    }

    fn disable_mock_location(&mut self) -> Result<()> {
        self.calls.push("disable_mock_location");
        self.mock_enabled = false;
        Ok(())
    }
}
