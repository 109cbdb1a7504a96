use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point-in-time price observation from the external provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// The single failure kind at the provider boundary. A response without a
/// usable price, a transport error, a timeout and an auth failure all fold
/// into this; the design does not distinguish "unknown symbol" from
/// "provider outage".
#[derive(Debug, Clone, Error)]
#[error("no usable quote for {symbol}: {reason}")]
pub struct QuoteUnavailable {
    pub symbol: String,
    pub reason: String,
}

impl QuoteUnavailable {
    pub fn new(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

pub type QuoteOutcome = Result<Quote, QuoteUnavailable>;

/// Single-symbol lookup against the external provider. Pure read, no side
/// effects, no retries.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> QuoteOutcome;
}
