//! Calorie calculator API routes

use crate::error::{ApiError, ApiResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use nutrisensia_shared::types::{CalculatorOptionsResponse, EstimateRequest, EstimateResponse};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(estimate))
        .route("/options", get(get_options))
}

/// POST /api/v1/calculator - Estimate BMR, TDEE and target calories
async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<EstimateResponse>> {
    let Json(req) = payload.map_err(ApiError::from)?;
    let response = CalculatorService::estimate(&state.config().calculator, req)?;
    Ok(Json(response))
}

/// GET /api/v1/calculator/options - Choices and slider ranges for the form
async fn get_options() -> Json<CalculatorOptionsResponse> {
    Json(CalculatorOptionsResponse::current())
}
