use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::domain::error::DomainError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-facing error: a status code plus a JSON `{"error": ...}` body
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::UserNotFound
            | DomainError::EventNotFound
            | DomainError::RegistrationNotFound => StatusCode::NOT_FOUND,
            DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        // Repository failures are logged server-side, not echoed to the client
        let message = match err {
            DomainError::Repository(inner) => {
                error!("repository error: {inner}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
