use axum::{Extension, Router, response::IntoResponse, routing::get};

use app::state::AppState;
use models::schemas::lab::LabSessionSchema;

use crate::error::ApiError;
use crate::extractor::Json;
use crate::middleware::lab::require_lab_session;

#[utoipa::path(
    get,
    path = "/lab/status",
    responses(
        (status = 200, description = "Current lab session", body = LabSessionSchema),
        (status = 401, description = "Missing or invalid session token"),
        (status = 403, description = "Token valid but not privileged"),
    ),
    security(("bearer_auth" = [])),
    tag = "lab"
)]
#[axum::debug_handler]
pub async fn status_get(
    Extension(session): Extension<LabSessionSchema>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(session))
}

pub fn create_lab_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/status", get(status_get))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            require_lab_session,
        ))
}
