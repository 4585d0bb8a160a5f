use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contract::{SubmitResponse, messages::FIELDS_MISSING};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No data received")]
    NoData,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{}", FIELDS_MISSING)]
    MissingFields,

    #[error("Store error: {0}")]
    Store(String),
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Store(format!("Corrupt row: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NoData | AppError::MalformedPayload(_) | AppError::MissingFields => {
                warn!("Rejected submission: {self}");
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) => {
                error!("Failed to save submission: {self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(SubmitResponse::failed(self.to_string()))).into_response()
    }
}
