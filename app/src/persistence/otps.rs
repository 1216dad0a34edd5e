use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use models::domains::otps;

pub async fn create_otp(
    db: &DbConn,
    email: String,
    code_hash: String,
    expiry: DateTimeWithTimeZone,
) -> Result<otps::Model, DbErr> {
    otps::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        email: Set(email),
        code_hash: Set(code_hash),
        expiry: Set(expiry),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
}

/// When the same code was somehow issued twice, only the freshest row counts.
pub async fn find_latest_otp(
    db: &DbConn,
    email: &str,
    code_hash: &str,
) -> Result<Option<otps::Model>, DbErr> {
    otps::Entity::find()
        .filter(otps::Column::Email.eq(email))
        .filter(otps::Column::CodeHash.eq(code_hash))
        .order_by_desc(otps::Column::Expiry)
        .one(db)
        .await
}

/// Deletes the row by id and reports whether this caller actually removed it.
/// The single conditional delete is what makes consumption atomic: of two
/// concurrent verifications holding the same row, only one sees `true`.
pub async fn consume_otp(db: &DbConn, id: &str) -> Result<bool, DbErr> {
    let result = otps::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected == 1)
}

pub async fn purge_expired(db: &DbConn) -> Result<u64, DbErr> {
    let result = otps::Entity::delete_many()
        .filter(otps::Column::Expiry.lt(Utc::now()))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
