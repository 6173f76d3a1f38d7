use std::sync::Arc;

use crate::{config::Config, main_lib::AppState, models};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod currencies;
mod health;
mod prices;
mod tax_loss;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        prices::get_spot_price,
        prices::get_batch_prices,
        currencies::list_currencies,
        currencies::update_currency,
        tax_loss::harvest_tax_loss,
    ),
    components(schemas(
        models::Holding,
        models::HoldingUpdate,
        models::SpotAmount,
        models::SpotPriceResponse,
        models::BatchPricesRequest,
        models::BatchPricesResponse,
        models::HoldingsResponse,
        models::UpdateHoldingResponse,
        models::HarvestResponse,
        models::HealthResponse,
        models::ErrorResponse,
    )),
    tags((name = "spotfolio"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(prices::router())
        .merge(currencies::router())
        .merge(tax_loss::router());

    Router::new()
        .merge(health::router())
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
