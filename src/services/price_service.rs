use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::AppError;
use crate::models::PriceRecord;

/// Ordered (oldest first) price history for a symbol. This is the read the
/// prediction subsystem consumes; an unknown symbol is just an empty series.
pub async fn get_history(pool: &SqlitePool, symbol: &str) -> Result<Vec<PriceRecord>, AppError> {
    let symbol = symbol.trim().to_uppercase();
    db::price_queries::fetch_history(pool, &symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch price history for {}: {}", symbol, e);
            AppError::Db(e)
        })
}

pub async fn get_latest(pool: &SqlitePool, symbol: &str) -> Result<PriceRecord, AppError> {
    let symbol = symbol.trim().to_uppercase();
    db::price_queries::fetch_latest(pool, &symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch latest price for {}: {}", symbol, e);
            AppError::Db(e)
        })?
        .ok_or(AppError::NotFound)
}
