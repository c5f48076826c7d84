use chrono::Utc;
use entity::sea_orm_active_enums::SyncJobStatus;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Job type of a bulk consent upload.
pub static CONSENT_BULK_UPLOAD_JOB: &str = "CONSENT_BULK_UPLOAD";

/// Repository for `sync_job`
pub struct SyncJobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SyncJobRepository<'a, C> {
    /// Creates a new instance of [`SyncJobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a job in `PROCESSING` state at progress 0
    pub async fn create(
        &self,
        union_id: i32,
        job_type: &str,
        preview_data: Option<serde_json::Value>,
    ) -> Result<entity::sync_job::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let job = entity::sync_job::ActiveModel {
            union_id: ActiveValue::Set(union_id),
            job_type: ActiveValue::Set(job_type.to_string()),
            status: ActiveValue::Set(SyncJobStatus::Processing),
            progress: ActiveValue::Set(0),
            preview_data: ActiveValue::Set(preview_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    /// Job with the given id
    pub async fn get(&self, job_id: i32) -> Result<Option<entity::sync_job::Model>, DbErr> {
        entity::prelude::SyncJob::find_by_id(job_id)
            .one(self.db)
            .await
    }

    /// Sets the progress percentage, clamped to `0..=100`
    pub async fn update_progress(&self, job_id: i32, progress: i32) -> Result<(), DbErr> {
        entity::prelude::SyncJob::update_many()
            .col_expr(
                entity::sync_job::Column::Progress,
                Expr::value(progress.clamp(0, 100)),
            )
            .col_expr(
                entity::sync_job::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::sync_job::Column::Id.eq(job_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks a job `COMPLETED` at progress 100 and stores its result summary
    pub async fn complete(
        &self,
        job_id: i32,
        preview_data: serde_json::Value,
    ) -> Result<(), DbErr> {
        self.finish(job_id, SyncJobStatus::Completed, Some(100), preview_data)
            .await
    }

    /// Marks a job `FAILED`, leaving its progress where it stopped
    pub async fn fail(&self, job_id: i32, preview_data: serde_json::Value) -> Result<(), DbErr> {
        self.finish(job_id, SyncJobStatus::Failed, None, preview_data)
            .await
    }

    async fn finish(
        &self,
        job_id: i32,
        status: SyncJobStatus,
        progress: Option<i32>,
        preview_data: serde_json::Value,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::SyncJob::update_many()
            .col_expr(entity::sync_job::Column::Status, Expr::value(status))
            .col_expr(
                entity::sync_job::Column::PreviewData,
                Expr::value(preview_data),
            )
            .col_expr(
                entity::sync_job::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            );
        if let Some(progress) = progress {
            update = update.col_expr(entity::sync_job::Column::Progress, Expr::value(progress));
        }

        update
            .filter(entity::sync_job::Column::Id.eq(job_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
