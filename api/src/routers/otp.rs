use axum::{Router, extract::State, response::IntoResponse, routing::post};

use app::core::issuer::issue_otp;
use app::core::verifier::verify_otp;
use app::state::AppState;
use app::utils::email::send_otp_email;
use app::utils::jwt::encode_data;
use models::params::otp::{SendOtpParams, VerifyOtpParams};
use models::schemas::lab::LabSessionSchema;
use models::schemas::otp::{MessageSchema, VerifyOtpSchema};

use crate::error::ApiError;
use crate::extractor::{Json, Valid};

#[utoipa::path(
    post,
    path = "/otp/send",
    request_body = SendOtpParams,
    responses(
        (status = 200, description = "Code generated and emailed", body = MessageSchema),
        (status = 400, description = "Missing or empty email"),
        (status = 500, description = "Persistence or delivery failure"),
    ),
    tag = "otp"
)]
#[axum::debug_handler]
pub async fn send_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<SendOtpParams>>,
) -> Result<impl IntoResponse, ApiError> {
    // Persistence and delivery failures are logged apart but both reach the
    // client as the same opaque error.
    let (record, code) = issue_otp(&state.conn, params.email.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to persist OTP record: {}", e);
            ApiError(anyhow::anyhow!("Failed to issue OTP"))
        })?;

    send_otp_email(&state.config, &params.email, &code)
        .await
        .map_err(|e| {
            tracing::error!("Failed to deliver OTP email for record {}: {}", record.id, e);
            ApiError(anyhow::anyhow!("Failed to deliver OTP"))
        })?;

    Ok(Json(MessageSchema::new("OTP sent")))
}

#[utoipa::path(
    post,
    path = "/otp/verify",
    request_body = VerifyOtpParams,
    responses(
        (status = 200, description = "Code accepted and consumed", body = VerifyOtpSchema),
        (status = 400, description = "Missing fields, invalid or expired code"),
    ),
    tag = "otp"
)]
#[axum::debug_handler]
pub async fn verify_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<VerifyOtpParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let dark_lab_access = verify_otp(
        &state.conn,
        &state.config.allowed_email,
        &params.email,
        &params.otp,
    )
    .await
    .map_err(ApiError)?;

    // Only a privileged verification earns a session token; everyone else
    // just gets confirmation that their code was good.
    let session_token = if dark_lab_access {
        Some(encode_data(
            &state.config,
            LabSessionSchema {
                email: params.email.clone(),
                dark_lab_access,
            },
        )?)
    } else {
        None
    };

    Ok(Json(VerifyOtpSchema {
        success: true,
        message: "OTP verified".to_string(),
        dark_lab_access,
        session_token,
    }))
}

pub fn create_otp_router() -> Router<AppState> {
    Router::new()
        .route("/send", post(send_post))
        .route("/verify", post(verify_post))
}
