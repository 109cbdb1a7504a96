use futures::future::join_all;

use crate::external::quote_provider::{QuoteOutcome, QuoteProvider};

/// Fetches quotes for every symbol concurrently and waits for all of them
/// to settle. Returns exactly one outcome per input symbol; a failure for
/// one symbol never cancels or blocks the others, it simply comes back as
/// an `Err` outcome.
pub async fn fetch_many(provider: &dyn QuoteProvider, symbols: &[String]) -> Vec<QuoteOutcome> {
    let fetches: Vec<_> = symbols
        .iter()
        .map(|symbol| provider.fetch_quote(symbol))
        .collect();

    join_all(fetches).await
}
