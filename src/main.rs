mod model;
mod server;

use dioxus_logger::tracing;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    scheduler::dashboard_updates,
    service::dashboard::{DashboardService, DashboardSettings},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    tracing::info!("Starting statboard");
    tracing::info!("Target channel ID: {}", config.discord_channel_id);
    tracing::info!("Update interval: {}s", config.update_interval.as_secs());

    let tracker = startup::open_growth_tracker(&config);

    let dashboard = DashboardService::new(
        tracker.clone(),
        DashboardSettings {
            channel_id: config.discord_channel_id,
            community_name: config.community_name.clone(),
            update_interval: config.update_interval,
        },
    );

    // Start the status surface when configured
    if let Some(addr) = config.status_bind_addr {
        let state = AppState::new(tracker.clone());
        tokio::spawn(async move {
            if let Err(e) = startup::serve_status(addr, state).await {
                tracing::error!("Status surface error: {}", e);
            }
        });
    }

    // Cycles are skipped until the bot has resolved the dashboard channel
    let _scheduler = dashboard_updates::start_scheduler(dashboard.clone()).await?;

    let client =
        bot::start::init_bot(&config.discord_bot_token, dashboard, config.voice_debounce).await?;

    // Runs until the gateway connection ends
    bot::start::start_bot(client).await?;

    tracing::info!("Bot shutting down");

    Ok(())
}
