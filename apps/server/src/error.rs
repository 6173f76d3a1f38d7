use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spotfolio_core::errors::Error as CoreError;
use spotfolio_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Harvest failures use the `{success, message}` envelope instead of `{error, status}`.
    #[error("{0}")]
    Harvest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

#[derive(Serialize)]
struct HarvestErrorBody {
    success: bool,
    message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::MarketData(md) => market_data_status(md),
                CoreError::CurrencyNotFound(_) => {
                    (StatusCode::NOT_FOUND, "Currency not found".to_string())
                }
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::NotFound(reason) => (StatusCode::NOT_FOUND, reason.clone()),
            ApiError::Harvest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        }
    }
}

fn market_data_status(err: &MarketDataError) -> (StatusCode, String) {
    match err {
        MarketDataError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, err.to_string()),
        MarketDataError::UpstreamStatus { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            err.to_string(),
        ),
        MarketDataError::RequestFailed { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        MarketDataError::InvalidResponse { .. } | MarketDataError::ClientBuild(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unexpected error: {}", err),
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{}", msg);
        }
        match self {
            ApiError::Harvest(_) => {
                let body = Json(HarvestErrorBody {
                    success: false,
                    message: msg,
                });
                (status, body).into_response()
            }
            _ => {
                let body = Json(ErrorBody {
                    error: msg,
                    status: status.as_u16(),
                });
                (status, body).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
