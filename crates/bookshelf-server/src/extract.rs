//! Request extractors shared across routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that rejects with the API error envelope.
///
/// Axum's stock `Json` rejection replies in plain text. Wrapping it keeps
/// unparseable bodies on the same `{"error": {...}}` shape as every other
/// failure, with code `MALFORMED_REQUEST`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(from_json_rejection(&rejection)),
        }
    }
}

fn from_json_rejection(rejection: &JsonRejection) -> ApiError {
    tracing::warn!(reason = %rejection.body_text(), "Rejected malformed request body");
    ApiError::MalformedRequest(rejection.body_text())
}
