use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_union_tenant::UnionTenant;

static IDX_ALIMTALK_LOG_UNION_ID_SENT_AT: &str = "idx-alimtalk_log-union_id-sent_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlimtalkLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AlimtalkLog::Id))
                    .col(integer_null(AlimtalkLog::UnionId))
                    .col(string(AlimtalkLog::TemplateCode))
                    .col(string(AlimtalkLog::Title))
                    .col(integer(AlimtalkLog::RecipientCount))
                    .col(integer(AlimtalkLog::KakaoSuccessCount))
                    .col(integer(AlimtalkLog::SmsSuccessCount))
                    .col(integer(AlimtalkLog::FailCount))
                    .col(double(AlimtalkLog::EstimatedCost))
                    .col(timestamp(AlimtalkLog::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-alimtalk_log-union_id")
                            .from(AlimtalkLog::Table, AlimtalkLog::UnionId)
                            .to(UnionTenant::Table, UnionTenant::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ALIMTALK_LOG_UNION_ID_SENT_AT)
                    .table(AlimtalkLog::Table)
                    .col(AlimtalkLog::UnionId)
                    .col(AlimtalkLog::SentAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALIMTALK_LOG_UNION_ID_SENT_AT)
                    .table(AlimtalkLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AlimtalkLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AlimtalkLog {
    Table,
    Id,
    UnionId,
    TemplateCode,
    Title,
    RecipientCount,
    KakaoSuccessCount,
    SmsSuccessCount,
    FailCount,
    EstimatedCost,
    SentAt,
}
