use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::HarvestResponse,
};
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

/// Sell the entire position in `symbol`, zeroing its quantity and cost basis.
#[utoipa::path(
    post,
    path = "/api/tax_loss/{symbol}",
    params(("symbol" = String, Path, description = "Currency symbol, e.g. ETH")),
    responses(
        (status = 200, description = "Position sold", body = HarvestResponse),
        (status = 400, description = "Unknown currency or harvest failure"),
    )
)]
pub async fn harvest_tax_loss(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HarvestResponse>> {
    let result = state
        .holdings_service
        .harvest_tax_loss(&symbol)
        .map_err(|e| ApiError::Harvest(format!("Error during tax loss harvesting: {}", e)))?;
    Ok(Json(result.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tax_loss/{symbol}", post(harvest_tax_loss))
}
