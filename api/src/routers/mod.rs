use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod lab;
pub mod otp;
pub mod root;

use app::state::AppState;
use lab::create_lab_router;
use otp::create_otp_router;
use root::create_root_router;

use crate::openapi::ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .nest("/otp", create_otp_router())
        .nest("/lab", create_lab_router(state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
