use chrono::Utc;
use sea_orm::DbConn;

use crate::error::CustomError;
use crate::persistence::otps::{consume_otp, find_latest_otp};
use crate::utils::code::hash_code;

/// Checks `code` against the stored records for `email` and consumes the
/// matching row on success. Returns whether the verified email is the
/// allow-listed one.
///
/// A code has exactly one successful use: the conditional delete in
/// `consume_otp` decides the winner when two callers race on the same row.
pub async fn verify_otp(
    db: &DbConn,
    allowed_email: &str,
    email: &str,
    code: &str,
) -> Result<bool, anyhow::Error> {
    let code_hash = hash_code(code);

    let record = find_latest_otp(db, email, &code_hash)
        .await?
        .ok_or_else(|| anyhow::Error::new(CustomError::invalid_otp()))?;

    if record.expiry < Utc::now() {
        // The row is dead either way; drop it now rather than leaving it
        // for the background purge.
        consume_otp(db, &record.id).await?;
        return Err(CustomError::expired_otp().into());
    }

    if !consume_otp(db, &record.id).await? {
        // A concurrent verification got there first.
        return Err(CustomError::invalid_otp().into());
    }

    Ok(email == allowed_email)
}
