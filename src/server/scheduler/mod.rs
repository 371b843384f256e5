//! Background jobs driving the dashboard.
//!
//! - `dashboard_updates` - Cron job running an update cycle every update interval
//! - `refresh` - Debounced, cancellable out-of-band refreshes triggered by gateway events

pub mod dashboard_updates;
pub mod refresh;
