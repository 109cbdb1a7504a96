use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::PriceRecord;
use crate::services;
use crate::services::sync_scheduler::SchedulerState;
use crate::services::sync_service::SyncReport;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/refresh", post(refresh_prices))
        .route("/:symbol", get(get_price_history))
        .route("/:symbol/latest", get(get_latest_price))
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// False when the trigger was dropped because a cycle was in flight.
    pub triggered: bool,
    pub state: SchedulerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SyncReport>,
}

pub async fn refresh_prices(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    info!("POST /prices/refresh - Manual price sync");
    match state.scheduler.try_refresh().await {
        Some(result) => {
            let report = result.map_err(|e| {
                error!("Manual price sync failed: {}", e);
                e
            })?;
            Ok(Json(RefreshResponse {
                triggered: true,
                state: state.scheduler.state(),
                report: Some(report),
            }))
        }
        None => Ok(Json(RefreshResponse {
            triggered: false,
            state: state.scheduler.state(),
            report: None,
        })),
    }
}

pub async fn get_price_history(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceRecord>>, AppError> {
    info!("GET /prices/{} - Getting price history", symbol);
    let records = services::price_service::get_history(&state.pool, &symbol)
        .await
        .map_err(|e| {
            error!("Failed to get price history for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(records))
}

pub async fn get_latest_price(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PriceRecord>, AppError> {
    info!("GET /prices/{}/latest - Getting latest price", symbol);
    let record = services::price_service::get_latest(&state.pool, &symbol)
        .await
        .map_err(|e| {
            error!("Failed to get latest price for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(record))
}
