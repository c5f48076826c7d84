use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_union_user::UnionUser;

static IDX_USER_PROPERTY_UNIT_USER_ID: &str = "idx-user_property_unit-user_id";
static FK_USER_PROPERTY_UNIT_USER_ID: &str = "fk-user_property_unit-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPropertyUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPropertyUnit::Id))
                    .col(integer(UserPropertyUnit::UserId))
                    .col(string_null(UserPropertyUnit::JibunAddress))
                    .col(string_null(UserPropertyUnit::Dong))
                    .col(string_null(UserPropertyUnit::Ho))
                    .col(timestamp(UserPropertyUnit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_PROPERTY_UNIT_USER_ID)
                    .table(UserPropertyUnit::Table)
                    .col(UserPropertyUnit::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PROPERTY_UNIT_USER_ID)
                    .from_tbl(UserPropertyUnit::Table)
                    .from_col(UserPropertyUnit::UserId)
                    .to_tbl(UnionUser::Table)
                    .to_col(UnionUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_PROPERTY_UNIT_USER_ID)
                    .table(UserPropertyUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_PROPERTY_UNIT_USER_ID)
                    .table(UserPropertyUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPropertyUnit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPropertyUnit {
    Table,
    Id,
    UserId,
    JibunAddress,
    Dong,
    Ho,
    CreatedAt,
}
