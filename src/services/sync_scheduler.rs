use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use sqlx::SqlitePool;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::services::sync_service::{self, SyncReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Triggers refresh cycles and guarantees that at most one runs at a time.
/// A trigger that arrives while a cycle is in flight is dropped, never
/// queued; the busy flag here is the only cross-cycle exclusion in the
/// system. Holds its own handles to the pool and provider so tests can
/// construct it with fakes.
#[derive(Clone)]
pub struct SyncScheduler {
    pool: SqlitePool,
    provider: Arc<dyn QuoteProvider>,
    running: Arc<AtomicBool>,
    last_report: Arc<Mutex<Option<SyncReport>>>,
}

impl SyncScheduler {
    pub fn new(pool: SqlitePool, provider: Arc<dyn QuoteProvider>) -> Self {
        Self {
            pool,
            provider,
            running: Arc::new(AtomicBool::new(false)),
            last_report: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.running.load(Ordering::SeqCst) {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn last_report(&self) -> Option<SyncReport> {
        self.last_report.lock().clone()
    }

    /// Runs one cycle unless another is already in flight, in which case
    /// the trigger is dropped and `None` is returned. An accepted cycle
    /// runs to completion; a failed commit is returned to the caller but
    /// leaves the scheduler idle and ready for the next trigger.
    pub async fn try_refresh(&self) -> Option<Result<SyncReport, AppError>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Price sync already in flight, dropping trigger");
            return None;
        }

        let result = sync_service::run_cycle(&self.pool, self.provider.as_ref()).await;
        if let Ok(report) = &result {
            *self.last_report.lock() = Some(report.clone());
        }
        self.running.store(false, Ordering::SeqCst);
        Some(result)
    }

    /// Registers the periodic cron trigger plus a one-shot warm-up cycle
    /// shortly after startup, so state is populated without blocking boot.
    /// Cycle failures are logged here and never tear the process down.
    pub async fn start(
        &self,
        cron: &str,
        startup_delay: Duration,
    ) -> Result<SchedulerHandle, AppError> {
        let mut cron_scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::Scheduler(format!("Failed to create scheduler: {e}")))?;

        let scheduler = self.clone();
        let job = Job::new_async(cron, move |_uuid, _lock| {
            let scheduler = scheduler.clone();
            Box::pin(async move {
                if let Some(Err(e)) = scheduler.try_refresh().await {
                    error!("Scheduled price sync failed: {}", e);
                }
            })
        })
        .map_err(|e| AppError::Scheduler(format!("Invalid sync schedule '{cron}': {e}")))?;

        cron_scheduler
            .add(job)
            .await
            .map_err(|e| AppError::Scheduler(format!("Failed to add sync job: {e}")))?;
        cron_scheduler
            .start()
            .await
            .map_err(|e| AppError::Scheduler(format!("Failed to start scheduler: {e}")))?;

        let scheduler = self.clone();
        let warmup = tokio::spawn(async move {
            tokio::time::sleep(startup_delay).await;
            if let Some(Err(e)) = scheduler.try_refresh().await {
                error!("Startup price sync failed: {}", e);
            }
        });

        info!("📅 Price sync scheduler started [cron: {}]", cron);
        Ok(SchedulerHandle {
            cron: cron_scheduler,
            warmup,
        })
    }
}

/// Owns the timers registered by `start`. Dropping it leaves them running;
/// `shutdown` cancels both the cron trigger and a pending warm-up.
pub struct SchedulerHandle {
    cron: JobScheduler,
    warmup: tokio::task::JoinHandle<()>,
}

impl SchedulerHandle {
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.warmup.abort();
        self.cron
            .shutdown()
            .await
            .map_err(|e| AppError::Scheduler(format!("Failed to stop scheduler: {e}")))?;
        Ok(())
    }
}
