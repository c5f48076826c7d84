use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlimtalkTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(AlimtalkTemplate::Id))
                    .col(string_uniq(AlimtalkTemplate::TemplateCode))
                    .col(string(AlimtalkTemplate::Name))
                    .col(text(AlimtalkTemplate::Content))
                    .col(string_len(AlimtalkTemplate::Status, 20))
                    .col(boolean(AlimtalkTemplate::LmsFailover).default(false))
                    .col(timestamp(AlimtalkTemplate::CreatedAt))
                    .col(timestamp(AlimtalkTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlimtalkTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AlimtalkTemplate {
    Table,
    Id,
    TemplateCode,
    Name,
    Content,
    Status,
    LmsFailover,
    CreatedAt,
    UpdatedAt,
}
