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
                    .table(LandLot::Table)
                    .if_not_exists()
                    .col(pk_auto(LandLot::Id))
                    .col(integer(LandLot::UnionId))
                    .col(string_len_uniq(LandLot::Pnu, 19))
                    .col(string(LandLot::Address))
                    .col(timestamp(LandLot::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-land_lot-union_id")
                            .from(LandLot::Table, LandLot::UnionId)
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
            .drop_table(Table::drop().table(LandLot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LandLot {
    Table,
    Id,
    UnionId,
    Pnu,
    Address,
    CreatedAt,
}
