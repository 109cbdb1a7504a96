mod position;
mod price_record;
mod valuation;

pub use position::{CreatePosition, Position};
pub use price_record::PriceRecord;
pub use valuation::{PortfolioSummary, PositionValuation};
