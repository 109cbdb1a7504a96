use sqlx::SqlitePool;

use crate::services::sync_scheduler::SyncScheduler;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub scheduler: SyncScheduler,
}
