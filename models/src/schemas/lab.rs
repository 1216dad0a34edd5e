use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims payload of the lab session token, echoed back by `/lab/status`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabSessionSchema {
    pub email: String,
    pub dark_lab_access: bool,
}
