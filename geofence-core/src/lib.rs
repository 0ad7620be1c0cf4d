//! Geofence Core Library
//!
//! Core functionality for a map screen that edits one circular geofence.
//! This crate provides the circle geometry, the transition status and the
//! mock-location and persistence helpers around it.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod geofence;
pub mod geometry;

pub use api::GeofenceCore;
