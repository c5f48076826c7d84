use chrono::Utc;
use entity::sea_orm_active_enums::SyncJobStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn sync_job<'a>(&'a mut self) -> SyncJobFixtures<'a> {
        SyncJobFixtures { setup: self }
    }
}

pub struct SyncJobFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SyncJobFixtures<'a> {
    pub async fn insert_sync_job(
        &self,
        union_id: i32,
        job_type: &str,
        status: SyncJobStatus,
        progress: i32,
    ) -> Result<entity::sync_job::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::SyncJob::insert(entity::sync_job::ActiveModel {
                union_id: ActiveValue::Set(union_id),
                job_type: ActiveValue::Set(job_type.to_string()),
                status: ActiveValue::Set(status),
                progress: ActiveValue::Set(progress),
                preview_data: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
