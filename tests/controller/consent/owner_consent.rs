//! Tests for the owner consent endpoint.

use axum::extract::Path;
use entity::sea_orm_active_enums::ConsentStatus;
use unionhub::{
    model::consent::RecordOwnerConsentDto,
    server::controller::consent::record_owner_consent,
};

use super::*;

/// Expect the latest recorded status to win
///
/// Expected: 200 OK twice, body carrying the second status
#[tokio::test]
async fn records_latest_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_owner_tables()
        .with_mock_union()
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;
    let owner = test
        .owner()
        .insert_owner(1, "홍길동", Some("010-1234-5678"), None)
        .await?;

    for status in [ConsentStatus::Agreed, ConsentStatus::Disagreed] {
        let result = record_owner_consent(
            State(test.into_app_state()),
            Path((1, owner.id, stage.id)),
            ApiJson(RecordOwnerConsentDto { status }),
        )
        .await;
        assert_eq!(result.into_response().status(), StatusCode::OK);
    }

    let result = record_owner_consent(
        State(test.into_app_state()),
        Path((1, owner.id, stage.id)),
        ApiJson(RecordOwnerConsentDto {
            status: ConsentStatus::Agreed,
        }),
    )
    .await;
    let body = body_json(result.into_response()).await;
    assert_eq!(body["status"], "AGREED");

    Ok(())
}

/// Expect an unknown owner to be reported as missing
///
/// Expected: 404 Not Found
#[tokio::test]
async fn fails_for_missing_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_owner_tables()
        .with_mock_union()
        .build()
        .await?;
    let stage = test.consent().insert_stage(1, "조합설립 동의", 1).await?;

    let result = record_owner_consent(
        State(test.into_app_state()),
        Path((1, 99, stage.id)),
        ApiJson(RecordOwnerConsentDto {
            status: ConsentStatus::Agreed,
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
