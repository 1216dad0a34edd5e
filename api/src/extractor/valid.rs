use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use validator::Validate;

use app::error::CustomError;

use crate::error::ApiError;

/// Runs the inner extractor, then the validator rules of the payload.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: FromRequest<S, Rejection = ApiError> + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let inner = T::from_request(req, state).await?;
        inner.validate().map_err(|e| {
            ApiError(anyhow::Error::new(CustomError::new(
                StatusCode::BAD_REQUEST,
                e.to_string(),
            )))
        })?;
        Ok(Valid(inner))
    }
}
