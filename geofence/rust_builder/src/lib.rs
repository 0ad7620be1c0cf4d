//! Flutter-Rust bridge wrapper for geofence-core.
//!
//! This crate serves as a thin view-binding layer that exposes the
//! `geofence-core` editor to the Flutter map screen via Cargokit. Only
//! primitive values and opaque handles cross the bridge.

pub mod api;

pub use geofence_core::*;
