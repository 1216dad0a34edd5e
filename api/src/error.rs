use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use app::error::CustomError;

/// Boundary error type: wraps anything, renders domain errors with their
/// status code and everything else as an opaque 500.
pub struct ApiError(pub anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(custom) = self.0.downcast_ref::<CustomError>() {
            return (
                custom.code,
                axum::Json(json!({ "error": custom.message })),
            )
                .into_response();
        }

        // Malformed or incomplete bodies are all client errors here, no
        // matter which rejection variant produced them.
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }

        tracing::error!("Internal error: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({ "error": "Something went wrong" })),
        )
            .into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
