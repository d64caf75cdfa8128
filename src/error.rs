//! Error handling
//!
//! Every failure on the request path (unreadable body, missing field,
//! wrong type, model error) is surfaced the same way: HTTP 400 with the
//! raw message under an `error` key. Clients get no finer distinction.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::features::ExtractError;
use crate::model::ModelError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read as JSON
    Payload(String),

    /// A required field was absent or not a number
    Extraction(String),

    /// The classifier rejected the assembled feature vector
    Inference(String),
}

impl ApiError {
    fn message(&self) -> &str {
        match self {
            ApiError::Payload(msg) => msg,
            ApiError::Extraction(msg) => msg,
            ApiError::Inference(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.message().to_string();
        tracing::debug!("request rejected: {}", message);

        let body = Json(json!({ "error": message }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        ApiError::Extraction(err.to_string())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Inference(err.to_string())
    }
}
