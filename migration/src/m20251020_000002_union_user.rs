use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_union_tenant::UnionTenant;

static IDX_UNION_USER_UNION_ID_NAME: &str = "idx-union_user-union_id-name";
static FK_UNION_USER_UNION_ID: &str = "fk-union_user-union_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnionUser::Table)
                    .if_not_exists()
                    .col(pk_auto(UnionUser::Id))
                    .col(integer(UnionUser::UnionId))
                    .col(string(UnionUser::Name))
                    .col(string_null(UnionUser::Phone))
                    .col(string_null(UnionUser::PropertyAddress))
                    .col(string_len(UnionUser::Status, 20))
                    .col(timestamp(UnionUser::CreatedAt))
                    .col(timestamp(UnionUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UNION_USER_UNION_ID_NAME)
                    .table(UnionUser::Table)
                    .col(UnionUser::UnionId)
                    .col(UnionUser::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_UNION_USER_UNION_ID)
                    .from_tbl(UnionUser::Table)
                    .from_col(UnionUser::UnionId)
                    .to_tbl(UnionTenant::Table)
                    .to_col(UnionTenant::Id)
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
                    .name(FK_UNION_USER_UNION_ID)
                    .table(UnionUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UNION_USER_UNION_ID_NAME)
                    .table(UnionUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UnionUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UnionUser {
    Table,
    Id,
    UnionId,
    Name,
    Phone,
    PropertyAddress,
    Status,
    CreatedAt,
    UpdatedAt,
}
