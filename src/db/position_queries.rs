use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Position;

pub async fn create(
    pool: &SqlitePool,
    symbol: &str,
    quantity: f64,
    entry_price: f64,
    current_price: f64,
) -> Result<Position, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "INSERT INTO positions (id, symbol, quantity, entry_price, current_price, added_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING id, symbol, quantity, entry_price, current_price, added_at, last_updated",
    )
    .bind(Uuid::new_v4())
    .bind(symbol)
    .bind(quantity)
    .bind(entry_price)
    .bind(current_price)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Position>, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "SELECT id, symbol, quantity, entry_price, current_price, added_at, last_updated
         FROM positions
         ORDER BY added_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &SqlitePool, id: Uuid) -> Result<Option<Position>, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "SELECT id, symbol, quantity, entry_price, current_price, added_at, last_updated
         FROM positions
         WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn symbol_exists(pool: &SqlitePool, symbol: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM positions WHERE symbol = ?1")
        .bind(symbol)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM positions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Symbols a sync cycle should refresh: every distinct symbol held with a
/// positive quantity.
pub async fn list_tracked_symbols(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT DISTINCT symbol FROM positions WHERE quantity > 0 ORDER BY symbol",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(symbol,)| symbol).collect())
}

/// Commits one sync cycle's successful quotes as a single atomic unit: for
/// every pair the position's current price is updated and a history row is
/// appended. Any failure rolls the whole batch back; symbols absent from
/// the batch keep their stale price.
pub async fn apply_price_update(
    pool: &SqlitePool,
    updates: &[(String, f64)],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let now = Utc::now();

    for (symbol, price) in updates {
        sqlx::query(
            "UPDATE positions SET current_price = ?1, last_updated = ?2 WHERE symbol = ?3",
        )
        .bind(price)
        .bind(now)
        .bind(symbol)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO price_history (id, symbol, price, recorded_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(Uuid::new_v4())
        .bind(symbol)
        .bind(price)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
