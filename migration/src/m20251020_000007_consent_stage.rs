use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_union_tenant::UnionTenant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsentStage::Table)
                    .if_not_exists()
                    .col(pk_auto(ConsentStage::Id))
                    .col(integer(ConsentStage::UnionId))
                    .col(string(ConsentStage::Name))
                    .col(integer(ConsentStage::SortOrder).default(0))
                    .col(timestamp(ConsentStage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-consent_stage-union_id")
                            .from(ConsentStage::Table, ConsentStage::UnionId)
                            .to(UnionTenant::Table, UnionTenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConsentStage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ConsentStage {
    Table,
    Id,
    UnionId,
    Name,
    SortOrder,
    CreatedAt,
}
