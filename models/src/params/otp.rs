use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

// Presence-only checks: any non-empty email is allowed to request a code,
// the privileged allow-list is only consulted at verification time.

#[derive(Deserialize, Validate, ToSchema)]
pub struct SendOtpParams {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct VerifyOtpParams {
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and OTP are required"))]
    pub otp: String,
}
