//! Factories for persisted records.
//!
//! Factories produce `serde_json::Value`s in the on-disk format rather than the
//! application's own types, so tests exercise the real deserialization path.

pub mod snapshot;
