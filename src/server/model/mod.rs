//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer: the growth
//! history persisted by the snapshot store and the guild statistics rendered on the
//! dashboard.

pub mod snapshot;
pub mod stats;
