use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::services::quote_service;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub updated: usize,
    pub failed: usize,
}

/// One refresh cycle: list tracked symbols, fetch all quotes, commit the
/// successful ones as a single atomic batch. Failed symbols are dropped
/// from the batch and keep their stale price until the next cycle. The
/// commit only runs after the whole batch has settled.
pub async fn run_cycle(
    pool: &SqlitePool,
    provider: &dyn QuoteProvider,
) -> Result<SyncReport, AppError> {
    let symbols = db::position_queries::list_tracked_symbols(pool).await?;
    if symbols.is_empty() {
        info!("No tracked symbols, skipping price sync");
        return Ok(SyncReport::default());
    }

    info!("🔄 Refreshing prices for {} symbols", symbols.len());
    let outcomes = quote_service::fetch_many(provider, &symbols).await;

    let mut updates = Vec::with_capacity(outcomes.len());
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Ok(quote) => updates.push((quote.symbol, quote.price)),
            Err(e) => {
                failed += 1;
                warn!("❌ {}", e);
            }
        }
    }

    if !updates.is_empty() {
        db::position_queries::apply_price_update(pool, &updates).await?;
    }

    info!("✅ Price sync done: {} updated, {} failed", updates.len(), failed);
    Ok(SyncReport {
        updated: updates.len(),
        failed,
    })
}
