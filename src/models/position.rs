use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// A tracked holding. `current_price` starts out as the entry price and is
// overwritten by the first successful sync cycle; `last_updated` stays NULL
// until a cycle has actually written a quote.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Position {
    pub id: Uuid,
    pub symbol: String,
    pub quantity: f64,
    pub entry_price: f64,
    pub current_price: Option<f64>,
    pub added_at: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePosition {
    pub symbol: String,
    pub quantity: f64,
    pub entry_price: f64,
}
