use sea_orm_migration::{prelude::*, schema::*};

static IDX_ALIMTALK_PRICING_TYPE_EFFECTIVE_FROM: &str =
    "idx-alimtalk_pricing-message_type-effective_from";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlimtalkPricing::Table)
                    .if_not_exists()
                    .col(pk_auto(AlimtalkPricing::Id))
                    .col(string_len(AlimtalkPricing::MessageType, 10))
                    .col(double(AlimtalkPricing::UnitPrice))
                    .col(timestamp(AlimtalkPricing::EffectiveFrom))
                    .col(timestamp(AlimtalkPricing::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALIMTALK_PRICING_TYPE_EFFECTIVE_FROM)
                    .table(AlimtalkPricing::Table)
                    .col(AlimtalkPricing::MessageType)
                    .col(AlimtalkPricing::EffectiveFrom)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALIMTALK_PRICING_TYPE_EFFECTIVE_FROM)
                    .table(AlimtalkPricing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AlimtalkPricing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AlimtalkPricing {
    Table,
    Id,
    MessageType,
    UnitPrice,
    EffectiveFrom,
    CreatedAt,
}
