//! Tests for the bulk consent upload endpoint.
//!
//! Covers the synchronous path below 50 rows, the delegated path from 50 rows, the
//! in-process fallback when the proxy rejects the hand-off, and request validation.

use std::time::Duration;

use entity::sea_orm_active_enums::{ConsentStatus, SyncJobStatus};
use sea_orm::{ConnectionTrait, EntityTrait};
use unionhub::{
    model::consent::{BulkUploadRequestDto, BulkUploadRowDto},
    server::{controller::consent::bulk_upload, proxy::ProxyClient},
};

use super::*;

fn rows(count: usize, name: &str, status: &str) -> Vec<BulkUploadRowDto> {
    (0..count)
        .map(|_| BulkUploadRowDto {
            name: name.to_string(),
            address: None,
            dong: None,
            ho: None,
            status: status.to_string(),
        })
        .collect()
}

fn request(union_id: i32, stage_id: i32, data: Vec<BulkUploadRowDto>) -> BulkUploadRequestDto {
    BulkUploadRequestDto {
        union_id: Some(union_id),
        stage_id: Some(stage_id),
        data,
    }
}

/// Expect 49 rows to be processed within the request without contacting the proxy
///
/// Expected: 200 OK with successCount/failCount and no jobId
#[tokio::test]
async fn processes_49_rows_synchronously() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .with_bulk_upload_endpoint(200, 0)
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    let member = test
        .member()
        .insert_approved_member(1, "김철수", None)
        .await?;

    let mut data = rows(48, "김철수", "동의");
    data.extend(rows(1, "모르는사람", "동의"));
    let result = bulk_upload(State(test.into_app_state()), ApiJson(request(1, stage.id, data))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["successCount"], 48);
    assert_eq!(body["failCount"], 1);
    assert_eq!(body["errors"][0]["row"], 49);
    assert!(body.get("jobId").is_none());

    let consents = entity::prelude::UserConsent::find().all(&test.db).await?;
    assert_eq!(consents.len(), 1);
    assert_eq!(consents[0].user_id, member.id);
    assert_eq!(consents[0].status, ConsentStatus::Agreed);
    assert!(entity::prelude::SyncJob::find().all(&test.db).await?.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect 50 rows to create a sync job and be handed off to the proxy
///
/// Expected: 200 OK with jobId, job left PROCESSING for the external worker
#[tokio::test]
async fn delegates_50_rows_to_proxy() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .with_bulk_upload_endpoint(202, 1)
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    test.member()
        .insert_approved_member(1, "김철수", None)
        .await?;

    let data = rows(50, "김철수", "동의");
    let result = bulk_upload(State(test.into_app_state()), ApiJson(request(1, stage.id, data))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let job_id = body["jobId"].as_i64().unwrap() as i32;
    assert!(body["message"].is_string());

    let job = entity::prelude::SyncJob::find_by_id(job_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(job.status, SyncJobStatus::Processing);
    assert_eq!(job.progress, 0);
    assert_eq!(job.job_type, "CONSENT_BULK_UPLOAD");
    let preview = job.preview_data.unwrap();
    assert_eq!(preview["stageId"], stage.id);
    assert_eq!(preview["totalRows"], 50);
    assert!(entity::prelude::UserConsent::find().all(&test.db).await?.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect a rejected hand-off to complete the job in-process
///
/// Expected: 200 OK with jobId, job COMPLETED at 100% with a result summary
#[tokio::test]
async fn completes_job_in_process_when_proxy_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .with_bulk_upload_endpoint(500, 1)
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    let member = test
        .member()
        .insert_approved_member(1, "김철수", None)
        .await?;

    let mut data = rows(59, "김철수", "비동의");
    data.extend(rows(1, "모르는사람", "동의"));
    let result = bulk_upload(State(test.into_app_state()), ApiJson(request(1, stage.id, data))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let job_id = body["jobId"].as_i64().unwrap() as i32;

    let job = entity::prelude::SyncJob::find_by_id(job_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(job.status, SyncJobStatus::Completed);
    assert_eq!(job.progress, 100);
    let preview = job.preview_data.unwrap();
    assert_eq!(preview["totalRows"], 60);
    assert_eq!(preview["successCount"], 59);
    assert_eq!(preview["failCount"], 1);
    assert_eq!(preview["errors"][0]["row"], 60);

    let consents = entity::prelude::UserConsent::find().all(&test.db).await?;
    assert_eq!(consents.len(), 1);
    assert_eq!(consents[0].user_id, member.id);
    assert_eq!(consents[0].status, ConsentStatus::Disagreed);

    test.assert_mocks();

    Ok(())
}

/// Expect the batch to complete in-process when nothing listens at the proxy address
///
/// Expected: 200 OK with jobId, job COMPLETED at 100% with every row applied
#[tokio::test]
async fn completes_job_in_process_when_proxy_unreachable() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    test.member()
        .insert_approved_member(1, "김철수", None)
        .await?;

    let mut state = test.into_app_state();
    state.proxy = ProxyClient::new("http://127.0.0.1:1", Duration::from_secs(2))
        .expect("Failed to build proxy client");
    let data = rows(50, "김철수", "동의");
    let result = bulk_upload(State(state), ApiJson(request(1, stage.id, data))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let job_id = body_json(resp).await["jobId"].as_i64().unwrap() as i32;

    let job = entity::prelude::SyncJob::find_by_id(job_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(job.status, SyncJobStatus::Completed);
    assert_eq!(job.progress, 100);
    let preview = job.preview_data.unwrap();
    assert_eq!(preview["successCount"], 50);
    assert_eq!(preview["failCount"], 0);

    let consents = entity::prelude::UserConsent::find().all(&test.db).await?;
    assert_eq!(consents.len(), 1);
    assert_eq!(consents[0].status, ConsentStatus::Agreed);

    Ok(())
}

/// Expect applied rows to be answered normally when the final job status cannot be written
///
/// Expected: 200 OK with jobId, consent stored, job left PROCESSING
#[tokio::test]
async fn answers_when_job_completion_cannot_be_stored() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .with_bulk_upload_endpoint(503, 1)
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    test.member()
        .insert_approved_member(1, "김철수", None)
        .await?;
    test.db
        .execute_unprepared(
            "CREATE TRIGGER sync_job_status_locked BEFORE UPDATE OF status ON sync_job \
             BEGIN SELECT RAISE(ABORT, 'status locked'); END",
        )
        .await?;

    let data = rows(50, "김철수", "동의");
    let result = bulk_upload(State(test.into_app_state()), ApiJson(request(1, stage.id, data))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let job_id = body_json(resp).await["jobId"].as_i64().unwrap() as i32;

    let job = entity::prelude::SyncJob::find_by_id(job_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(job.status, SyncJobStatus::Processing);
    let consents = entity::prelude::UserConsent::find().all(&test.db).await?;
    assert_eq!(consents.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect same-name members to be told apart by dong/ho
#[tokio::test]
async fn routes_rows_by_unit_filters() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    let first = test
        .member()
        .insert_approved_member(1, "박영수", Some("행당동 10"))
        .await?;
    let second = test
        .member()
        .insert_approved_member(1, "박영수", Some("행당동 10"))
        .await?;
    test.member()
        .insert_property_unit(first.id, Some("행당동 10"), Some("101"), Some("1001"))
        .await?;
    test.member()
        .insert_property_unit(second.id, Some("행당동 10"), Some("102"), Some("202"))
        .await?;

    let data = vec![BulkUploadRowDto {
        name: "박영수".to_string(),
        address: Some("행당동".to_string()),
        dong: Some("102".to_string()),
        ho: Some("202".to_string()),
        status: "AGREED".to_string(),
    }];
    let result = bulk_upload(State(test.into_app_state()), ApiJson(request(1, stage.id, data))).await;

    assert_eq!(result.into_response().status(), StatusCode::OK);
    let consents = entity::prelude::UserConsent::find().all(&test.db).await?;
    assert_eq!(consents.len(), 1);
    assert_eq!(consents[0].user_id, second.id);

    Ok(())
}

/// Expect missing fields to be rejected with their Korean message
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_incomplete_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .build()
        .await?;

    let cases = [
        (
            BulkUploadRequestDto {
                union_id: None,
                stage_id: Some(1),
                data: rows(1, "김철수", "동의"),
            },
            "조합 ID가 필요합니다.",
        ),
        (
            BulkUploadRequestDto {
                union_id: Some(1),
                stage_id: None,
                data: rows(1, "김철수", "동의"),
            },
            "동의 단계 ID가 필요합니다.",
        ),
        (request(1, 1, Vec::new()), "업로드할 데이터가 없습니다."),
    ];

    for (request, message) in cases {
        let result = bulk_upload(State(test.into_app_state()), ApiJson(request)).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], message);
    }

    Ok(())
}

/// Expect a stage of another union to be reported as missing
///
/// Expected: 404 Not Found
#[tokio::test]
async fn rejects_stage_of_other_union() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_sync_job_table()
        .with_mock_union()
        .build()
        .await?;
    let other = test.union().insert_union("다른 조합", "other").await?;
    let stage = test.consent().insert_stage(other.id, "조합설립 동의", 1).await?;

    let result = bulk_upload(
        State(test.into_app_state()),
        ApiJson(request(1, stage.id, rows(1, "김철수", "동의"))),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
