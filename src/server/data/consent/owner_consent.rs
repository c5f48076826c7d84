use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::ConsentStatus;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for `owner_consent`
pub struct OwnerConsentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerConsentRepository<'a, C> {
    /// Creates a new instance of [`OwnerConsentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an owner's consent at a stage, overwriting any existing row for the pairing
    pub async fn upsert(
        &self,
        owner_id: i32,
        stage_id: i32,
        status: ConsentStatus,
        consent_date: NaiveDate,
    ) -> Result<entity::owner_consent::Model, DbErr> {
        let consent = entity::owner_consent::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            stage_id: ActiveValue::Set(stage_id),
            status: ActiveValue::Set(status),
            consent_date: ActiveValue::Set(consent_date),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::OwnerConsent::insert(consent)
            .on_conflict(
                OnConflict::columns([
                    entity::owner_consent::Column::OwnerId,
                    entity::owner_consent::Column::StageId,
                ])
                .update_columns([
                    entity::owner_consent::Column::Status,
                    entity::owner_consent::Column::ConsentDate,
                    entity::owner_consent::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
