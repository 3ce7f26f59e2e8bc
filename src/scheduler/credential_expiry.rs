use chrono::{DateTime, Duration, Utc};
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::CredentialStore,
    error::AppError,
    service::{
        discord::{DirectMessenger, DiscordGateway},
        password::PASSWORD_TRIGGER,
    },
    state::BotState,
};

/// Age in seconds after which an issued password counts as expired.
pub const EXPIRY_THRESHOLD_SECONDS: i64 = 60;

/// Runs the sweep every second.
const SWEEP_SCHEDULE: &str = "* * * * * *";

/// Counts from a single sweep cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: usize,
    pub expired: usize,
    pub notified: usize,
}

/// Starts the credential expiry scheduler
///
/// This scheduler runs every second and DMs every member whose password is older than
/// [`EXPIRY_THRESHOLD_SECONDS`]. Expired credentials are not removed, so the member is
/// notified again on every cycle until they request a new password.
///
/// A cycle that is still sending notifications when the next one fires causes the next
/// one to be skipped.
///
/// # Arguments
/// - `state`: Shared bot state holding the credential store
/// - `discord_http`: Discord HTTP client for sending notifications
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the life of the process
/// - `Err(AppError::SchedulerErr)` - Job creation or scheduler start failed
pub async fn start_scheduler(
    state: BotState,
    discord_http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_store = state.credentials.clone();
    let job_gateway = DiscordGateway::new(discord_http);
    let sweep_lock = Arc::new(Mutex::new(()));

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let store = job_store.clone();
        let gateway = job_gateway.clone();
        let sweep_lock = sweep_lock.clone();

        Box::pin(async move {
            let Ok(_guard) = sweep_lock.try_lock() else {
                tracing::debug!("Previous credential sweep still running, skipping");
                return;
            };

            let report = sweep_expired(&store, &gateway, Utc::now()).await;
            if report.expired > 0 {
                tracing::debug!(
                    "Credential sweep: {} scanned, {} expired, {} notified",
                    report.scanned,
                    report.expired,
                    report.notified
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Credential expiry scheduler started");

    Ok(scheduler)
}

/// Performs one sweep cycle over the credential store.
///
/// Every record strictly older than [`EXPIRY_THRESHOLD_SECONDS`] as of `now` triggers
/// one expiry DM to its subject. A failed DM is logged and the sweep continues with the
/// remaining records.
///
/// # Arguments
/// - `store` - Credential store to scan
/// - `messenger` - Used to send expiry notices
/// - `now` - Reference time for computing credential age
///
/// # Returns
/// - `SweepReport` - Number of records scanned, expired and successfully notified
pub async fn sweep_expired(
    store: &CredentialStore,
    messenger: &dyn DirectMessenger,
    now: DateTime<Utc>,
) -> SweepReport {
    let threshold = Duration::seconds(EXPIRY_THRESHOLD_SECONDS);
    let records = store.scan().await;

    let mut report = SweepReport {
        scanned: records.len(),
        ..SweepReport::default()
    };

    for record in records
        .iter()
        .filter(|record| record.is_expired(now, threshold))
    {
        report.expired += 1;

        tracing::info!(
            "Password for {} ({}) is too old, issued {}s ago",
            record.display_name,
            record.subject_id,
            record.age(now).num_seconds()
        );

        match messenger
            .send_direct(record.subject_id, &expiry_message())
            .await
        {
            Ok(()) => report.notified += 1,
            Err(e) => tracing::error!(
                "Failed to send expiry notice to {}: {}",
                record.subject_id,
                e
            ),
        }
    }

    report
}

fn expiry_message() -> String {
    format!("Your password has expired. Send `{PASSWORD_TRIGGER}` in the server to get a new one.")
}
