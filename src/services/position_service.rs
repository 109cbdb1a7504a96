use sqlx::SqlitePool;
use tracing::error;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreatePosition, PortfolioSummary, Position, PositionValuation};
use crate::services::valuation_service;

/// Adds a holding. The symbol is case-normalized before the uniqueness
/// check; the current price is seeded with the entry price as a placeholder
/// until the first sync cycle overwrites it.
pub async fn create(pool: &SqlitePool, input: CreatePosition) -> Result<Position, AppError> {
    let symbol = input.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("Symbol cannot be empty".into()));
    }
    if input.quantity <= 0.0 || !input.quantity.is_finite() {
        return Err(AppError::Validation("Quantity must be > 0".into()));
    }
    if input.entry_price <= 0.0 || !input.entry_price.is_finite() {
        return Err(AppError::Validation("Entry price must be > 0".into()));
    }

    if db::position_queries::symbol_exists(pool, &symbol).await? {
        return Err(AppError::DuplicateSymbol(symbol));
    }

    match db::position_queries::create(pool, &symbol, input.quantity, input.entry_price, input.entry_price).await
    {
        Ok(position) => Ok(position),
        // Concurrent adds can slip past the pre-check; the UNIQUE
        // constraint has the final say.
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateSymbol(symbol)),
        Err(e) => {
            error!("Failed to create position for {}: {}", symbol, e);
            Err(AppError::Db(e))
        }
    }
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<PositionValuation>, AppError> {
    let positions = db::position_queries::fetch_all(pool).await?;
    Ok(positions.iter().map(valuation_service::value_position).collect())
}

pub async fn summary(pool: &SqlitePool) -> Result<PortfolioSummary, AppError> {
    let positions = db::position_queries::fetch_all(pool).await?;
    Ok(valuation_service::summarize(&positions))
}

pub async fn fetch_one(pool: &SqlitePool, id: Uuid) -> Result<Position, AppError> {
    db::position_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<(), AppError> {
    match db::position_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::Db(e)),
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err)
        if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation))
}
