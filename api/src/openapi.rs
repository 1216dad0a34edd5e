use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dark Lab API",
        version = "0.1.0",
        description = "Email OTP issuance and verification gating the Dark Lab area",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::otp::send_post,
        crate::routers::otp::verify_post,
        crate::routers::lab::status_get,
    ),
    components(
        schemas(
            models::params::otp::SendOtpParams,
            models::params::otp::VerifyOtpParams,
            models::schemas::otp::MessageSchema,
            models::schemas::otp::VerifyOtpSchema,
            models::schemas::lab::LabSessionSchema,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "otp", description = "Code issuance and verification endpoints"),
        (name = "lab", description = "Privileged Dark Lab endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Lab session token authentication"))
                        .build(),
                ),
            );
        }
    }
}
