//! Tests for the consent stage endpoints.

use axum::extract::Path;
use entity::sea_orm_active_enums::ConsentStatus;
use unionhub::{
    model::consent::CreateConsentStageDto,
    server::controller::consent::{create_stage, list_stages, stage_summary},
};

use super::*;

/// Expect a created stage to be listed after the existing ones
///
/// Expected: 201 Created, then 200 OK with both stages in order
#[tokio::test]
async fn creates_and_lists_stages() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_union()
        .build()
        .await?;
    test.consent().insert_stage(1, "추진위 동의", 1).await?;

    let created = create_stage(
        State(test.into_app_state()),
        Path(1),
        ApiJson(CreateConsentStageDto {
            name: "조합설립 동의".to_string(),
            sort_order: None,
        }),
    )
    .await;
    assert_eq!(created.into_response().status(), StatusCode::CREATED);

    let listed = list_stages(State(test.into_app_state()), Path(1)).await;
    let resp = listed.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["name"], "추진위 동의");
    assert_eq!(body[1]["name"], "조합설립 동의");
    assert_eq!(body[1]["sortOrder"], 2);

    Ok(())
}

/// Expect stage listing of an unknown union to fail
///
/// Expected: 404 Not Found
#[tokio::test]
async fn list_fails_for_missing_union() -> Result<(), TestError> {
    let test = TestBuilder::new().with_consent_tables().build().await?;

    let result = list_stages(State(test.into_app_state()), Path(3)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect summary counts over matchable members
///
/// Expected: 200 OK with agreed/disagreed/pending
#[tokio::test]
async fn summarizes_stage() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_consent_tables()
        .with_mock_union()
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    let agreed = test
        .member()
        .insert_approved_member(1, "김철수", None)
        .await?;
    test.member()
        .insert_approved_member(1, "이영희", None)
        .await?;
    test.consent()
        .insert_user_consent(agreed.id, stage.id, ConsentStatus::Agreed)
        .await?;

    let result = stage_summary(State(test.into_app_state()), Path((1, stage.id))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["stageId"], stage.id);
    assert_eq!(body["agreed"], 1);
    assert_eq!(body["disagreed"], 0);
    assert_eq!(body["pending"], 1);

    Ok(())
}
