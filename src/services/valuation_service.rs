use crate::models::{PortfolioSummary, Position, PositionValuation};

/// Derives the per-position metrics from ledger state at query time.
/// Unpriced positions are flagged rather than valued at zero.
pub fn value_position(position: &Position) -> PositionValuation {
    match position.current_price {
        Some(current) => {
            let invested = position.entry_price * position.quantity;
            let value = position.quantity * current;
            let gain = (current - position.entry_price) * position.quantity;
            let gain_pct = if invested > 0.0 {
                gain / invested * 100.0
            } else {
                0.0
            };
            PositionValuation {
                position: position.clone(),
                value: Some(value),
                gain: Some(gain),
                gain_pct: Some(gain_pct),
                priced: true,
            }
        }
        None => PositionValuation {
            position: position.clone(),
            value: None,
            gain: None,
            gain_pct: None,
            priced: false,
        },
    }
}

/// Aggregate metrics over the whole ledger. Unpriced positions contribute
/// nothing to value and gain; invested capital counts every position.
pub fn summarize(positions: &[Position]) -> PortfolioSummary {
    let mut total_value = 0.0;
    let mut total_gain = 0.0;
    let mut total_invested = 0.0;
    let mut last_updated = None;

    for position in positions {
        total_invested += position.quantity * position.entry_price;
        if let Some(current) = position.current_price {
            total_value += position.quantity * current;
            total_gain += (current - position.entry_price) * position.quantity;
        }
        if position.last_updated > last_updated {
            last_updated = position.last_updated;
        }
    }

    let total_gain_pct = if total_invested > 0.0 {
        total_gain / total_invested * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_value,
        total_gain,
        total_gain_pct,
        last_updated,
    }
}
