use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnionTenant::Table)
                    .if_not_exists()
                    .col(pk_auto(UnionTenant::Id))
                    .col(string(UnionTenant::Name))
                    .col(string_uniq(UnionTenant::Slug))
                    .col(string_null(UnionTenant::Phone))
                    .col(string_null(UnionTenant::BusinessHours))
                    .col(string_null(UnionTenant::KakaoChannelId))
                    .col(boolean(UnionTenant::IsActive).default(true))
                    .col(timestamp(UnionTenant::CreatedAt))
                    .col(timestamp(UnionTenant::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnionTenant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UnionTenant {
    Table,
    Id,
    Name,
    Slug,
    Phone,
    BusinessHours,
    KakaoChannelId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
