use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000004_land_lot::LandLot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildingUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(BuildingUnit::Id))
                    .col(integer(BuildingUnit::LandLotId))
                    .col(string_null(BuildingUnit::Dong))
                    .col(string_null(BuildingUnit::Ho))
                    .col(timestamp(BuildingUnit::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-building_unit-land_lot_id")
                            .from(BuildingUnit::Table, BuildingUnit::LandLotId)
                            .to(LandLot::Table, LandLot::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BuildingUnit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BuildingUnit {
    Table,
    Id,
    LandLotId,
    Dong,
    Ho,
    CreatedAt,
}
