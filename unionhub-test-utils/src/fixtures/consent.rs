use chrono::Utc;
use entity::sea_orm_active_enums::ConsentStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn consent<'a>(&'a mut self) -> ConsentFixtures<'a> {
        ConsentFixtures { setup: self }
    }
}

pub struct ConsentFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ConsentFixtures<'a> {
    pub async fn insert_stage(
        &self,
        union_id: i32,
        name: &str,
        sort_order: i32,
    ) -> Result<entity::consent_stage::Model, TestError> {
        Ok(
            entity::prelude::ConsentStage::insert(entity::consent_stage::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                name: ActiveValue::Set(name.to_string()),
                sort_order: ActiveValue::Set(sort_order),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_consent(
        &self,
        user_id: i32,
        stage_id: i32,
        status: ConsentStatus,
    ) -> Result<entity::user_consent::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::UserConsent::insert(entity::user_consent::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                stage_id: ActiveValue::Set(stage_id),
                status: ActiveValue::Set(status),
                consent_date: ActiveValue::Set(now.date()),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_owner_consent(
        &self,
        owner_id: i32,
        stage_id: i32,
        status: ConsentStatus,
    ) -> Result<entity::owner_consent::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::OwnerConsent::insert(entity::owner_consent::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                stage_id: ActiveValue::Set(stage_id),
                status: ActiveValue::Set(status),
                consent_date: ActiveValue::Set(now.date()),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
