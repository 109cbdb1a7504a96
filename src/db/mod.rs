pub mod position_queries;
pub mod price_queries;

use sqlx::SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

/// Provisions the schema on startup by executing the bundled statements one
/// by one. Everything in `schema.sql` is idempotent, so re-running against
/// an existing database is a no-op.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
