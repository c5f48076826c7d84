use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, sync_job::SyncJobDto},
    server::{error::Error, model::app::AppState, service::sync_job::SyncJobService},
};

/// OpenAPI tag of the sync job endpoints
pub static SYNC_JOB_TAG: &str = "sync-job";

/// Poll the state of a tracked job
#[utoipa::path(
    get,
    path = "/api/sync-jobs/{id}",
    tag = SYNC_JOB_TAG,
    params(("id" = i32, Path, description = "Sync job id")),
    responses(
        (status = 200, description = "Job status, progress and preview data", body = SyncJobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sync_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let job = SyncJobService::new(&state.db).get(job_id).await?;

    Ok((StatusCode::OK, Json(job)))
}
