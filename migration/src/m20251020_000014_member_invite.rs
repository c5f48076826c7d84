use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_union_tenant::UnionTenant, m20251020_000006_owner::Owner};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberInvite::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberInvite::Id))
                    .col(integer(MemberInvite::UnionId))
                    .col(integer(MemberInvite::OwnerId))
                    .col(string_len_uniq(MemberInvite::Token, 64))
                    .col(timestamp(MemberInvite::ExpiresAt))
                    .col(timestamp_null(MemberInvite::UsedAt))
                    .col(timestamp(MemberInvite::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-member_invite-union_id")
                            .from(MemberInvite::Table, MemberInvite::UnionId)
                            .to(UnionTenant::Table, UnionTenant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-member_invite-owner_id")
                            .from(MemberInvite::Table, MemberInvite::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberInvite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MemberInvite {
    Table,
    Id,
    UnionId,
    OwnerId,
    Token,
    ExpiresAt,
    UsedAt,
    CreatedAt,
}
