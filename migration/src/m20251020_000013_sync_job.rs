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
                    .table(SyncJob::Table)
                    .if_not_exists()
                    .col(pk_auto(SyncJob::Id))
                    .col(integer(SyncJob::UnionId))
                    .col(string(SyncJob::JobType))
                    .col(string_len(SyncJob::Status, 20))
                    .col(integer(SyncJob::Progress).default(0))
                    .col(json_binary_null(SyncJob::PreviewData))
                    .col(timestamp(SyncJob::CreatedAt))
                    .col(timestamp(SyncJob::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-sync_job-union_id")
                            .from(SyncJob::Table, SyncJob::UnionId)
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
            .drop_table(Table::drop().table(SyncJob::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SyncJob {
    Table,
    Id,
    UnionId,
    JobType,
    Status,
    Progress,
    PreviewData,
    CreatedAt,
    UpdatedAt,
}
