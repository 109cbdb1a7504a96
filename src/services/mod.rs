pub mod position_service;
pub mod price_service;
pub mod quote_service;
pub mod sync_scheduler;
pub mod sync_service;
pub mod valuation_service;
