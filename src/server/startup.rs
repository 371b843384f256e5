use dioxus_logger::tracing::{self, Level};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;

use crate::server::{
    config::Config, data::snapshot::SnapshotStore, error::AppError, router,
    service::growth::GrowthTracker, state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Logs at `info` by default and at `debug` when `STATBOARD_DEBUG` is set.
///
/// # Arguments
/// - `config` - Application configuration containing the debug flag
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already installed
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    let level = if config.debug_logging {
        Level::DEBUG
    } else {
        Level::INFO
    };

    dioxus_logger::init(level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Opens the growth tracker on the configured history file.
///
/// A missing or unreadable file starts an empty history, so this never fails.
///
/// # Arguments
/// - `config` - Application configuration containing the growth data file path
///
/// # Returns
/// - `Arc<Mutex<GrowthTracker>>` - Tracker shared by the dashboard and status surface
pub fn open_growth_tracker(config: &Config) -> Arc<Mutex<GrowthTracker>> {
    let store = SnapshotStore::new(config.growth_data_file.clone());
    let tracker = GrowthTracker::open(store);

    let logs = tracker.logs();
    if logs.is_empty() {
        tracing::info!(
            "Starting without growth history ({})",
            config.growth_data_file.display()
        );
    } else {
        tracing::info!(
            "Loaded growth history from {} ({} fine-grained, {} daily snapshots)",
            config.growth_data_file.display(),
            logs.fine_grained.len(),
            logs.daily.len()
        );
    }

    Arc::new(Mutex::new(tracker))
}

/// Serves the JSON status surface until the process exits.
///
/// # Arguments
/// - `addr` - Socket address to bind
/// - `state` - Shared application state
///
/// # Returns
/// - `Ok(())` - Server shut down
/// - `Err(AppError::IoErr)` - Address could not be bound or serving failed
pub async fn serve_status(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Status surface listening on {}", addr);

    axum::serve(listener, router::router().with_state(state)).await?;

    Ok(())
}
