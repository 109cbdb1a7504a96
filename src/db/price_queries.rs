use sqlx::SqlitePool;

use crate::models::PriceRecord;

/// Full history for a symbol, oldest first. The ascending order is part of
/// the contract with downstream consumers of the series.
pub async fn fetch_history(
    pool: &SqlitePool,
    symbol: &str,
) -> Result<Vec<PriceRecord>, sqlx::Error> {
    sqlx::query_as::<_, PriceRecord>(
        "SELECT id, symbol, price, recorded_at
         FROM price_history
         WHERE symbol = ?1
         ORDER BY recorded_at ASC, id ASC",
    )
    .bind(symbol)
    .fetch_all(pool)
    .await
}

pub async fn fetch_latest(
    pool: &SqlitePool,
    symbol: &str,
) -> Result<Option<PriceRecord>, sqlx::Error> {
    sqlx::query_as::<_, PriceRecord>(
        "SELECT id, symbol, price, recorded_at
         FROM price_history
         WHERE symbol = ?1
         ORDER BY recorded_at DESC, id DESC
         LIMIT 1",
    )
    .bind(symbol)
    .fetch_optional(pool)
    .await
}
