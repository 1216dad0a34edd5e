use chrono::{Duration, Utc};
use sea_orm::{DbConn, DbErr};

use models::domains::otps;

use crate::persistence::otps::create_otp;
use crate::utils::code::{generate_code, hash_code};

/// How long an issued code stays valid.
pub const OTP_TTL_MINUTES: i64 = 10;

/// Generates and persists a fresh code for `email`, returning the stored row
/// together with the plaintext for delivery. Only the hash is persisted.
///
/// Prior unconsumed codes for the same email stay valid until they expire;
/// each one matches only its own row through the `(email, code_hash)` lookup,
/// so outstanding codes never shadow each other.
pub async fn issue_otp(db: &DbConn, email: String) -> Result<(otps::Model, String), DbErr> {
    let code = generate_code();
    let expiry = (Utc::now() + Duration::minutes(OTP_TTL_MINUTES)).into();
    let record = create_otp(db, email, hash_code(&code), expiry).await?;
    Ok((record, code))
}
