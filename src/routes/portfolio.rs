use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreatePosition, PortfolioSummary, Position, PositionValuation};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_positions))
        .route("/summary", get(get_summary))
        .route("/add", post(add_position))
        .route("/:id", delete(delete_position))
}

pub async fn list_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PositionValuation>>, AppError> {
    info!("GET /portfolio - Listing positions");
    let positions = services::position_service::list(&state.pool).await.map_err(|e| {
        error!("Failed to list positions: {}", e);
        e
    })?;
    Ok(Json(positions))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<PortfolioSummary>, AppError> {
    info!("GET /portfolio/summary - Getting summary");
    let summary = services::position_service::summary(&state.pool).await.map_err(|e| {
        error!("Failed to build portfolio summary: {}", e);
        e
    })?;
    Ok(Json(summary))
}

pub async fn add_position(
    State(state): State<AppState>,
    Json(input): Json<CreatePosition>,
) -> Result<(StatusCode, Json<Position>), AppError> {
    info!("POST /portfolio/add - Adding position {}", input.symbol);
    let position = services::position_service::create(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to add position: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(position)))
}

pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /portfolio/{} - Deleting position", id);
    services::position_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete position {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
