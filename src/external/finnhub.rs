use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::quote_provider::{Quote, QuoteOutcome, QuoteProvider, QuoteUnavailable};

/// Finnhub `/quote` client. One request per symbol; the request timeout is
/// the cycle's protection against a hung provider call.
pub struct FinnhubClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FinnhubClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FinnhubQuote {
    /// Current price. Finnhub reports 0 for symbols it does not know.
    c: Option<f64>,
    /// Absolute change since previous close.
    d: Option<f64>,
    /// Percent change since previous close.
    dp: Option<f64>,
}

#[async_trait]
impl QuoteProvider for FinnhubClient {
    async fn fetch_quote(&self, symbol: &str) -> QuoteOutcome {
        let url = format!("{}/quote", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("token", &self.api_key)])
            .send()
            .await
            .map_err(|e| QuoteUnavailable::new(symbol, e.to_string()))?;

        if !resp.status().is_success() {
            return Err(QuoteUnavailable::new(
                symbol,
                format!("HTTP {}", resp.status()),
            ));
        }

        let body: FinnhubQuote = resp
            .json()
            .await
            .map_err(|e| QuoteUnavailable::new(symbol, e.to_string()))?;

        match body.c {
            Some(price) if price > 0.0 => Ok(Quote {
                symbol: symbol.to_string(),
                price,
                change: body.d.unwrap_or(0.0),
                change_percent: body.dp.unwrap_or(0.0),
            }),
            _ => Err(QuoteUnavailable::new(symbol, "no current price in response")),
        }
    }
}
