use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::dashboard::DashboardService};

/// Starts the dashboard update scheduler
///
/// Runs an update cycle every `update_interval` from the dashboard settings. Cycles
/// are skipped by the service until the target channel has been resolved, so the
/// scheduler can be started before the bot has connected.
///
/// # Arguments
/// - `service`: Dashboard service whose cycle is run
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; dropping the handle does not stop it
/// - `Err(AppError::SchedulerErr)` - Job could not be created or the scheduler started
pub async fn start_scheduler(service: DashboardService) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let interval = service.settings().update_interval;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let service = service.clone();

        Box::pin(async move {
            service.run_cycle().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Dashboard update scheduler started (every {}s)",
        interval.as_secs()
    );

    Ok(scheduler)
}
