use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000006_owner::Owner, m20251020_000007_consent_stage::ConsentStage};

static UQ_OWNER_CONSENT_OWNER_ID_STAGE_ID: &str = "uq-owner_consent-owner_id-stage_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnerConsent::Table)
                    .if_not_exists()
                    .col(pk_auto(OwnerConsent::Id))
                    .col(integer(OwnerConsent::OwnerId))
                    .col(integer(OwnerConsent::StageId))
                    .col(string_len(OwnerConsent::Status, 20))
                    .col(date(OwnerConsent::ConsentDate))
                    .col(timestamp(OwnerConsent::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-owner_consent-owner_id")
                            .from(OwnerConsent::Table, OwnerConsent::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-owner_consent-stage_id")
                            .from(OwnerConsent::Table, OwnerConsent::StageId)
                            .to(ConsentStage::Table, ConsentStage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_OWNER_CONSENT_OWNER_ID_STAGE_ID)
                    .table(OwnerConsent::Table)
                    .col(OwnerConsent::OwnerId)
                    .col(OwnerConsent::StageId)
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
                    .name(UQ_OWNER_CONSENT_OWNER_ID_STAGE_ID)
                    .table(OwnerConsent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OwnerConsent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OwnerConsent {
    Table,
    Id,
    OwnerId,
    StageId,
    Status,
    ConsentDate,
    UpdatedAt,
}
