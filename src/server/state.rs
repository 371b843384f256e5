//! Application state shared across the status surface handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::service::growth::GrowthTracker;

/// Application state containing shared resources.
///
/// Cloning is cheap; the growth tracker is shared with the dashboard service, so the
/// status endpoint reports the snapshot recorded by the latest dashboard cycle.
#[derive(Clone)]
pub struct AppState {
    /// Growth history recorded by the dashboard cycles.
    pub tracker: Arc<Mutex<GrowthTracker>>,
}

impl AppState {
    pub fn new(tracker: Arc<Mutex<GrowthTracker>>) -> Self {
        Self { tracker }
    }
}
