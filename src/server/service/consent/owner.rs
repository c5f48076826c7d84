use chrono::Utc;
use entity::sea_orm_active_enums::ConsentStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::consent::OwnerConsentDto,
    server::{
        data::{
            consent::{owner_consent::OwnerConsentRepository, stage::ConsentStageRepository},
            owner::OwnerRepository,
        },
        error::{not_found::NotFoundError, Error},
    },
};

/// Service recording owner consent, which drives NON_AGREED reminders.
pub struct OwnerConsentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerConsentService<'a> {
    /// Creates a new instance of [`OwnerConsentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an owner's consent at a stage, dated today
    ///
    /// Repeated calls for the same owner and stage replace the earlier status.
    ///
    /// # Returns
    /// - `Ok(OwnerConsentDto)` - Stored consent
    /// - `Err(Error::NotFoundError)` - Owner or stage does not exist in the union
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn record(
        &self,
        union_id: i32,
        owner_id: i32,
        stage_id: i32,
        status: ConsentStatus,
    ) -> Result<OwnerConsentDto, Error> {
        if OwnerRepository::new(self.db)
            .get_for_union(union_id, owner_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Owner(owner_id).into());
        }
        if ConsentStageRepository::new(self.db)
            .get_for_union(union_id, stage_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::ConsentStage(stage_id).into());
        }

        let consent = OwnerConsentRepository::new(self.db)
            .upsert(owner_id, stage_id, status, Utc::now().date_naive())
            .await?;

        Ok(consent.into())
    }
}
