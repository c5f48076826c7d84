use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ConsentStatus;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository for `user_consent`
pub struct UserConsentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserConsentRepository<'a, C> {
    /// Creates a new instance of [`UserConsentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a member's consent at a stage
    ///
    /// Relies on the unique `(user_id, stage_id)` index: an existing row is overwritten with
    /// the new status and date, so concurrent uploads of the same pairing leave one row.
    pub async fn upsert(
        &self,
        user_id: i32,
        stage_id: i32,
        status: ConsentStatus,
        consent_date: NaiveDate,
    ) -> Result<entity::user_consent::Model, DbErr> {
        let consent = entity::user_consent::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            stage_id: ActiveValue::Set(stage_id),
            status: ActiveValue::Set(status),
            consent_date: ActiveValue::Set(consent_date),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::UserConsent::insert(consent)
            .on_conflict(
                OnConflict::columns([
                    entity::user_consent::Column::UserId,
                    entity::user_consent::Column::StageId,
                ])
                .update_columns([
                    entity::user_consent::Column::Status,
                    entity::user_consent::Column::ConsentDate,
                    entity::user_consent::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// A member's consent at a stage
    pub async fn get(
        &self,
        user_id: i32,
        stage_id: i32,
    ) -> Result<Option<entity::user_consent::Model>, DbErr> {
        entity::prelude::UserConsent::find()
            .filter(entity::user_consent::Column::UserId.eq(user_id))
            .filter(entity::user_consent::Column::StageId.eq(stage_id))
            .one(self.db)
            .await
    }

    /// Consent rows at a stage restricted to the given members
    pub async fn get_by_stage_for_users(
        &self,
        stage_id: i32,
        user_ids: &[i32],
    ) -> Result<Vec<entity::user_consent::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserConsent::find()
            .filter(entity::user_consent::Column::StageId.eq(stage_id))
            .filter(entity::user_consent::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
