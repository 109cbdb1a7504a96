use async_trait::async_trait;

use super::quote_provider::{Quote, QuoteOutcome, QuoteProvider};

/// Keyless stand-in for Finnhub: a per-symbol base price jittered by a small
/// random walk. Lets the whole sync pipeline run in development without an
/// API key.
pub struct MockQuoteProvider;

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    async fn fetch_quote(&self, symbol: &str) -> QuoteOutcome {
        let base = 20.0 + (symbol.bytes().map(u64::from).sum::<u64>() % 400) as f64;
        let price = base * (1.0 + (rand::random::<f64>() - 0.5) * 0.02);
        let change = price - base;

        Ok(Quote {
            symbol: symbol.to_string(),
            price,
            change,
            change_percent: change / base * 100.0,
        })
    }
}
