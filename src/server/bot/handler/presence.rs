use dioxus_logger::tracing;
use serenity::all::{Context, Presence};

/// Handles the presence_update event
///
/// Status changes are frequent, so they do not refresh the dashboard; the next
/// scheduled cycle picks them up from the cache.
pub async fn handle_presence_update(_ctx: Context, new_data: Presence) {
    tracing::debug!(
        "Status change: {} is now {:?}",
        new_data.user.id,
        new_data.status
    );
}
