use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// One observed price for a symbol. Rows are append-only: a sync cycle is the
// only writer, and nothing updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceRecord {
    pub id: Uuid,
    pub symbol: String,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
}
