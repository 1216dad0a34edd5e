use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use app::error::CustomError;
use app::state::AppState;
use app::utils::jwt::decode_data;
use models::schemas::lab::LabSessionSchema;

use crate::error::ApiError;

/// Guards privileged routes: requires a Bearer session token issued at
/// verification time and validated here, server-side, on every request.
pub async fn require_lab_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| anyhow::Error::new(CustomError::unauthorized("Missing session token")))?;

    let session: LabSessionSchema = decode_data(&state.config, token).map_err(|e| {
        tracing::debug!("Rejected lab session token: {}", e);
        anyhow::Error::new(CustomError::unauthorized("Invalid or expired session token"))
    })?;

    if !session.dark_lab_access {
        return Err(CustomError::forbidden("Dark Lab access not granted").into());
    }

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
