use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// A token to store for an owner.
pub struct NewInvite {
    /// Owner the invite is issued to
    pub owner_id: i32,
    /// Token embedded in the invite link
    pub token: String,
}

/// Repository for `member_invite`
pub struct MemberInviteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberInviteRepository<'a, C> {
    /// Creates a new instance of [`MemberInviteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores invite tokens sharing one expiry
    pub async fn create_many(
        &self,
        union_id: i32,
        invites: Vec<NewInvite>,
        expires_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        if invites.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let invites = invites
            .into_iter()
            .map(|invite| entity::member_invite::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                owner_id: ActiveValue::Set(invite.owner_id),
                token: ActiveValue::Set(invite.token),
                expires_at: ActiveValue::Set(expires_at),
                used_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::MemberInvite::insert_many(invites)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Invite with the given token
    pub async fn get_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::member_invite::Model>, DbErr> {
        entity::prelude::MemberInvite::find()
            .filter(entity::member_invite::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Invites issued to an owner
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::member_invite::Model>, DbErr> {
        entity::prelude::MemberInvite::find()
            .filter(entity::member_invite::Column::OwnerId.eq(owner_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create_many {
        use chrono::{Duration, Utc};
        use unionhub_test_utils::prelude::*;

        use crate::server::data::invite::{MemberInviteRepository, NewInvite};

        /// Expect every token to be stored with the shared expiry
        #[tokio::test]
        async fn stores_tokens() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_owner_tables().build().await?;
            let union = test.union().insert_mock_union().await?;
            let owner = test
                .owner()
                .insert_owner(union.id, "김철수", Some("010-1111-1111"), None)
                .await?;

            let expires_at = Utc::now().naive_utc() + Duration::days(7);
            let invite_repo = MemberInviteRepository::new(&test.db);
            invite_repo
                .create_many(
                    union.id,
                    vec![NewInvite {
                        owner_id: owner.id,
                        token: "a".repeat(32),
                    }],
                    expires_at,
                )
                .await?;

            let invite = invite_repo.get_by_token(&"a".repeat(32)).await?.unwrap();
            assert_eq!(invite.owner_id, owner.id);
            assert_eq!(
                invite.expires_at.and_utc().timestamp(),
                expires_at.and_utc().timestamp()
            );
            assert!(invite.used_at.is_none());

            Ok(())
        }

        /// Expect an empty batch to be a no-op
        #[tokio::test]
        async fn accepts_empty_batch() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let invite_repo = MemberInviteRepository::new(&test.db);
            let result = invite_repo
                .create_many(1, Vec::new(), Utc::now().naive_utc())
                .await;

            assert!(result.is_ok());

            Ok(())
        }
    }
}
