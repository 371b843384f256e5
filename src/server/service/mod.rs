//! Service layer.
//!
//! - `growth` - Growth history recording and growth percentage estimation
//! - `stats` - Statistics collection from the gateway cache
//! - `dashboard` - Building and publishing the live dashboard message

pub mod dashboard;
pub mod growth;
pub mod stats;
