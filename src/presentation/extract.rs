use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::presentation::error::ApiError;

/// `axum::Json` with its rejection mapped into the JSON error envelope, so a
/// malformed body gets the same `{"error": ...}` shape as every other failure
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::new(rejection.status(), rejection.body_text())),
        }
    }
}
