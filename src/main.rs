use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

use portfolio_tracker::app;
use portfolio_tracker::config::AppConfig;
use portfolio_tracker::db;
use portfolio_tracker::external::finnhub::FinnhubClient;
use portfolio_tracker::external::mock::MockQuoteProvider;
use portfolio_tracker::external::quote_provider::QuoteProvider;
use portfolio_tracker::logging;
use portfolio_tracker::services::sync_scheduler::SyncScheduler;
use portfolio_tracker::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging FIRST
    logging::init();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    db::init_schema(&pool).await?;
    tracing::info!("✅ Database initialized: {}", config.database_url);

    let provider: Arc<dyn QuoteProvider> = match &config.finnhub_api_key {
        Some(key) => {
            tracing::info!("📊 Using quote provider: Finnhub");
            Arc::new(FinnhubClient::new(
                key.clone(),
                config.finnhub_base_url.clone(),
                config.quote_timeout,
            ))
        }
        None => {
            tracing::warn!("📊 FINNHUB_API_KEY not set, using mock quote provider");
            Arc::new(MockQuoteProvider)
        }
    };

    let scheduler = SyncScheduler::new(pool.clone(), provider);
    // The handle keeps the timers alive for the lifetime of the process.
    let _scheduler_handle = scheduler
        .start(&config.sync_cron, config.startup_sync_delay)
        .await?;

    let state = AppState {
        pool,
        scheduler,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Portfolio tracker backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
