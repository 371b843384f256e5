//! Persistence layer.
//!
//! This module contains the store types that own on-disk state. Stores hand domain
//! models to the service layer and keep file handling, serialization and recovery
//! from bad files out of the business logic.

pub mod snapshot;
