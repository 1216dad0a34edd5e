use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageSchema {
    pub message: String,
}

impl MessageSchema {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpSchema {
    pub success: bool,
    pub message: String,
    pub dark_lab_access: bool,
    /// Short-lived signed session token, present only when the verified
    /// email is the privileged one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}
