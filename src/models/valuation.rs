use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Position;

/// A position together with the metrics derived from it at query time.
/// `value`/`gain`/`gain_pct` are absent for unpriced positions rather than
/// reported as zero.
#[derive(Debug, Clone, Serialize)]
pub struct PositionValuation {
    #[serde(flatten)]
    pub position: Position,
    pub value: Option<f64>,
    pub gain: Option<f64>,
    pub gain_pct: Option<f64>,
    pub priced: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_gain: f64,
    pub total_gain_pct: f64,
    pub last_updated: Option<DateTime<Utc>>,
}
