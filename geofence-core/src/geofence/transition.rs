//! Geofence transitions and the status shown to the user.

use serde::{Deserialize, Serialize};

/// A transition reported by the platform geofencing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeofenceTransition {
    /// The device entered the geofence.
    Enter,
    /// The device left the geofence.
    Exit,
}

impl GeofenceTransition {
    /// Platform code for entering a geofence.
    pub const ENTER_CODE: i32 = 1;
    /// Platform code for leaving a geofence.
    pub const EXIT_CODE: i32 = 2;

    /// Decodes a platform transition code.
    ///
    /// Only enter and exit are recognized; dwell and unknown codes give `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::ENTER_CODE => Some(Self::Enter),
            Self::EXIT_CODE => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the device is currently inside the geofence, as far as we know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeofenceStatus {
    /// Last transition was an enter.
    Inside,
    /// Last transition was an exit.
    Outside,
    /// No transition seen, geofencing stopped, or an unrecognized transition.
    #[default]
    Unknown,
}

impl GeofenceStatus {
    /// Status following a decoded transition (`None` for unrecognized codes).
    #[must_use]
    pub const fn after(transition: Option<GeofenceTransition>) -> Self {
        match transition {
            Some(GeofenceTransition::Enter) => Self::Inside,
            Some(GeofenceTransition::Exit) => Self::Outside,
            None => Self::Unknown,
        }
    }

    /// Label shown in the status display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_platform_codes() {
        assert_eq!(GeofenceTransition::from_code(1), Some(GeofenceTransition::Enter));
        assert_eq!(GeofenceTransition::from_code(2), Some(GeofenceTransition::Exit));
        // Dwell
        assert_eq!(GeofenceTransition::from_code(4), None);
        assert_eq!(GeofenceTransition::from_code(0), None);
    }

    #[test]
    fn status_after_transition() {
        assert_eq!(
            GeofenceStatus::after(Some(GeofenceTransition::Enter)),
            GeofenceStatus::Inside
        );
        assert_eq!(
            GeofenceStatus::after(Some(GeofenceTransition::Exit)),
            GeofenceStatus::Outside
        );
        assert_eq!(GeofenceStatus::after(None), GeofenceStatus::Unknown);
    }

    #[test]
    fn status_default_is_unknown() {
        assert_eq!(GeofenceStatus::default(), GeofenceStatus::Unknown);
    }

    #[test]
    fn status_labels() {
        assert_eq!(GeofenceStatus::Inside.as_str(), "inside");
        assert_eq!(GeofenceStatus::Outside.as_str(), "outside");
        assert_eq!(GeofenceStatus::Unknown.as_str(), "unknown");
    }
}
