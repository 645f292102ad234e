use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use service::validation::ValidationErrors;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with the per-field message map as the body
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// 400 for a body that could not be parsed at all
    #[error("{0}")]
    Malformed(String),
    /// 413 when the body is over the route's limit
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("Unsupported media type \"{0}\" in request.")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errs) => ApiError::Validation(errs),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errs) => (StatusCode::BAD_REQUEST, Json(errs)).into_response(),
            ApiError::Malformed(msg) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"detail": msg}))).into_response()
            }
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Json(serde_json::json!({"detail": msg}))).into_response()
            }
            e @ ApiError::UnsupportedMediaType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(serde_json::json!({"detail": e.to_string()})),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Internal Server Error", "message": msg})),
                )
                    .into_response()
            }
        }
    }
}
