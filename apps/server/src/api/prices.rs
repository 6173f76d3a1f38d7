use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{BatchPricesRequest, BatchPricesResponse, SpotAmount, SpotPriceResponse},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use spotfolio_core::{constants::NO_PAIRS_PROVIDED, prices::format_amount};

#[utoipa::path(
    get,
    path = "/api/prices/{pair}/spot",
    params(("pair" = String, Path, description = "Currency pair, e.g. BTC-USD")),
    responses(
        (status = 200, description = "Current spot price", body = SpotPriceResponse),
        (status = 504, description = "Upstream timed out", body = crate::models::ErrorResponse),
        (status = 500, description = "Upstream request failed", body = crate::models::ErrorResponse),
    )
)]
pub async fn get_spot_price(
    Path(pair): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SpotPriceResponse>> {
    let price = state.price_service.get_spot_price(&pair).await?;
    Ok(Json(SpotPriceResponse {
        data: SpotAmount {
            amount: format_amount(price),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/prices/batch",
    request_body = BatchPricesRequest,
    responses(
        (status = 200, description = "Prices by pair", body = BatchPricesResponse),
        (status = 400, description = "No currency pairs provided", body = crate::models::ErrorResponse),
    )
)]
pub async fn get_batch_prices(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchPricesRequest>, JsonRejection>,
) -> ApiResult<Json<BatchPricesResponse>> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!("Rejected batch body: {}", e);
        ApiError::BadRequest(NO_PAIRS_PROVIDED.to_string())
    })?;
    let pairs = body.pairs.unwrap_or_default();

    let prices = state.price_service.get_batch_prices(&pairs).await?;
    let data = prices
        .into_iter()
        .map(|(pair, price)| (pair, price.map(format_amount)))
        .collect();
    Ok(Json(BatchPricesResponse { data }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices/{pair}/spot", get(get_spot_price))
        .route("/prices/batch", post(get_batch_prices))
}
