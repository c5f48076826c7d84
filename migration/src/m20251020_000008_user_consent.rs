use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000002_union_user::UnionUser, m20251020_000007_consent_stage::ConsentStage,
};

/// Backs the `ON CONFLICT (user_id, stage_id)` upsert
static UQ_USER_CONSENT_USER_ID_STAGE_ID: &str = "uq-user_consent-user_id-stage_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserConsent::Table)
                    .if_not_exists()
                    .col(pk_auto(UserConsent::Id))
                    .col(integer(UserConsent::UserId))
                    .col(integer(UserConsent::StageId))
                    .col(string_len(UserConsent::Status, 20))
                    .col(date(UserConsent::ConsentDate))
                    .col(timestamp(UserConsent::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_consent-user_id")
                            .from(UserConsent::Table, UserConsent::UserId)
                            .to(UnionUser::Table, UnionUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_consent-stage_id")
                            .from(UserConsent::Table, UserConsent::StageId)
                            .to(ConsentStage::Table, ConsentStage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_USER_CONSENT_USER_ID_STAGE_ID)
                    .table(UserConsent::Table)
                    .col(UserConsent::UserId)
                    .col(UserConsent::StageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_USER_CONSENT_USER_ID_STAGE_ID)
                    .table(UserConsent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserConsent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserConsent {
    Table,
    Id,
    UserId,
    StageId,
    Status,
    ConsentDate,
    UpdatedAt,
}
