//! Tests for the sync job polling endpoint.

use axum::extract::Path;
use entity::sea_orm_active_enums::SyncJobStatus;
use unionhub::server::controller::sync_job::get_sync_job;

use super::*;

/// Expect a tracked job to be returned with its progress
///
/// Expected: 200 OK with status and progress
#[tokio::test]
async fn returns_job() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_sync_job_table()
        .with_mock_union()
        .build()
        .await?;
    let job = test
        .sync_job()
        .insert_sync_job(1, "CONSENT_UPLOAD", SyncJobStatus::Processing, 40)
        .await?;

    let result = get_sync_job(State(test.into_app_state()), Path(job.id)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "PROCESSING");
    assert_eq!(body["progress"], 40);

    Ok(())
}

/// Expect an unknown job to be reported as missing
///
/// Expected: 404 Not Found
#[tokio::test]
async fn fails_for_missing_job() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sync_job_table().build().await?;

    let result = get_sync_job(State(test.into_app_state()), Path(11)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
