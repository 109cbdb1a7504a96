use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// When absent the mock quote provider is used instead of Finnhub.
    pub finnhub_api_key: Option<String>,
    pub finnhub_base_url: String,
    /// Upper bound on a single quote request. A quote that times out is a
    /// normal fetch failure, it never stalls the rest of the cycle.
    pub quote_timeout: Duration,
    /// Six-field cron expression for the periodic sync (default hourly).
    pub sync_cron: String,
    /// Delay before the warm-up sync that runs once after startup.
    pub startup_sync_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Loads .env if present (no crash if missing)
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://portfolio.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(3001),
            finnhub_api_key: env::var("FINNHUB_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            finnhub_base_url: env::var("FINNHUB_BASE_URL")
                .unwrap_or_else(|_| "https://finnhub.io/api/v1".to_string()),
            quote_timeout: Duration::from_secs(env_u64("QUOTE_TIMEOUT_SECS", 10)),
            sync_cron: env::var("SYNC_CRON").unwrap_or_else(|_| "0 0 * * * *".to_string()),
            startup_sync_delay: Duration::from_secs(env_u64("STARTUP_SYNC_DELAY_SECS", 5)),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}
