use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Holding, HoldingUpdate, HoldingsResponse, UpdateHoldingResponse},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use spotfolio_core::Error as CoreError;

#[utoipa::path(
    get,
    path = "/api/currencies",
    responses((status = 200, description = "All holdings", body = HoldingsResponse))
)]
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> Json<HoldingsResponse> {
    let data = state
        .holdings_service
        .get_holdings()
        .into_iter()
        .map(Holding::from)
        .collect();
    Json(HoldingsResponse { data })
}

#[utoipa::path(
    put,
    path = "/api/currencies/{symbol}",
    params(("symbol" = String, Path, description = "Currency symbol, e.g. BTC")),
    request_body = HoldingUpdate,
    responses(
        (status = 200, description = "Updated holding", body = UpdateHoldingResponse),
        (status = 404, description = "Currency not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Malformed update", body = crate::models::ErrorResponse),
    )
)]
pub async fn update_currency(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HoldingUpdate>, JsonRejection>,
) -> ApiResult<Json<UpdateHoldingResponse>> {
    let Json(update) = payload
        .map_err(|e| ApiError::Internal(format!("Failed to update currency: {}", e.body_text())))?;

    match state.holdings_service.update_holding(&symbol, update.into()) {
        Ok(holding) => Ok(Json(UpdateHoldingResponse {
            success: true,
            data: holding.into(),
        })),
        Err(CoreError::CurrencyNotFound(_)) => {
            Err(ApiError::NotFound("Currency not found".to_string()))
        }
        Err(e) => Err(ApiError::Internal(format!(
            "Failed to update currency: {}",
            e
        ))),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/{symbol}", put(update_currency))
}
