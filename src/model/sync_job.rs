use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::SyncJobStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncJobDto {
    pub id: i32,
    pub union_id: i32,
    pub job_type: String,
    #[schema(value_type = String)]
    pub status: SyncJobStatus,
    pub progress: i32,
    #[schema(value_type = Option<Object>)]
    pub preview_data: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::sync_job::Model> for SyncJobDto {
    fn from(job: entity::sync_job::Model) -> Self {
        Self {
            id: job.id,
            union_id: job.union_id,
            job_type: job.job_type,
            status: job.status,
            progress: job.progress,
            preview_data: job.preview_data,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
