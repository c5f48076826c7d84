use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_union_tenant::UnionTenant, m20251020_000002_union_user::UnionUser,
    m20251020_000005_building_unit::BuildingUnit,
};

static IDX_OWNER_UNION_ID: &str = "idx-owner-union_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(integer(Owner::UnionId))
                    .col(integer_null(Owner::BuildingUnitId))
                    .col(integer_null(Owner::UserId))
                    .col(string(Owner::Name))
                    .col(string_null(Owner::Phone))
                    .col(timestamp(Owner::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-owner-union_id")
                            .from(Owner::Table, Owner::UnionId)
                            .to(UnionTenant::Table, UnionTenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-owner-building_unit_id")
                            .from(Owner::Table, Owner::BuildingUnitId)
                            .to(BuildingUnit::Table, BuildingUnit::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-owner-user_id")
                            .from(Owner::Table, Owner::UserId)
                            .to(UnionUser::Table, UnionUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNER_UNION_ID)
                    .table(Owner::Table)
                    .col(Owner::UnionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNER_UNION_ID)
                    .table(Owner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    UnionId,
    BuildingUnitId,
    UserId,
    Name,
    Phone,
    CreatedAt,
}
