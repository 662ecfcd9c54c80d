use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::RepoError;

/// Body of every non-2xx response; the dashboard shows `message` to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Failure of an API call, already translated to what the client sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failures; the message is generic and the cause only goes to the log
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Translate a repository outcome. `failure` is the message clients see
    /// when storage itself failed.
    pub fn from_repo(err: RepoError, failure: &str) -> Self {
        match err {
            RepoError::Validation(message) => {
                log::warn!("Rejected request: {}", message);
                ApiError::BadRequest(message)
            }
            RepoError::Duplicate(message) => {
                log::warn!("Rejected request: {}", message);
                ApiError::Conflict(message)
            }
            RepoError::NotFound(message) => ApiError::NotFound(message),
            RepoError::Store(source) => {
                log::error!("{} {}", failure, source);
                ApiError::Internal(failure.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log::warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(&self.to_string()))).into_response()
    }
}
