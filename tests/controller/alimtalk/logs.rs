//! Tests for the send log endpoints.

use axum::extract::Path;
use chrono::Utc;
use unionhub::server::controller::alimtalk::{list_all_logs, list_union_logs};

use super::*;

/// Expect union logs to exclude other unions while the admin listing includes all
///
/// Expected: 200 OK for both, with matching stats
#[tokio::test]
async fn lists_logs_with_stats() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_alimtalk_tables()
        .with_mock_union()
        .build()
        .await?;
    let other = test.union().insert_union("다른 조합", "other").await?;
    let now = Utc::now().naive_utc();
    test.alimtalk()
        .insert_log(Some(1), "CONSENT_REMINDER", (3, 1, 0), 47.0, now)
        .await?;
    test.alimtalk()
        .insert_log(Some(other.id), "REGISTER_INVITE", (0, 0, 4), 0.0, now)
        .await?;

    let union_logs = list_union_logs(State(test.into_app_state()), Path(1)).await;
    let resp = union_logs.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["logs"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["stats"]["totalCount"], 4);
    assert_eq!(body["stats"]["successRate"], 100.0);

    let all_logs = list_all_logs(State(test.into_app_state())).await;
    let body = body_json(all_logs.into_response()).await;
    assert_eq!(body["stats"]["logCount"], 2);
    assert_eq!(body["stats"]["failCount"], 4);
    assert_eq!(body["stats"]["successRate"], 50.0);

    Ok(())
}

/// Expect logs of an unknown union to be reported as missing
///
/// Expected: 404 Not Found
#[tokio::test]
async fn fails_for_missing_union() -> Result<(), TestError> {
    let test = TestBuilder::new().with_alimtalk_tables().build().await?;

    let result = list_union_logs(State(test.into_app_state()), Path(7)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
