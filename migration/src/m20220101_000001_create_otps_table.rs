use models::domains::otps;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(otps::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(otps::Column::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(otps::Column::Email).string().not_null())
                    .col(ColumnDef::new(otps::Column::CodeHash).string().not_null())
                    .col(
                        ColumnDef::new(otps::Column::Expiry)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(otps::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Verification looks rows up by (email, code_hash).
        manager
            .create_index(
                Index::create()
                    .name("idx_otps_email_code_hash")
                    .table(otps::Entity)
                    .col(otps::Column::Email)
                    .col(otps::Column::CodeHash)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(otps::Entity).to_owned())
            .await
    }
}
