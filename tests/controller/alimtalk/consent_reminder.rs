//! Tests for the consent reminder endpoint, delivering through the mock proxy.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MessageType, TemplateStatus};
use sea_orm::EntityTrait;
use serde_json::json;
use unionhub::{
    model::alimtalk::{ConsentReminderRequestDto, ReminderTargetDto},
    server::{
        controller::alimtalk::send_consent_reminder,
        service::alimtalk::reminder::{CONSENT_REMINDER_TEMPLATE, REGISTER_INVITE_TEMPLATE},
    },
};

use super::*;

fn invite_request() -> ConsentReminderRequestDto {
    ConsentReminderRequestDto {
        union_id: Some(1),
        target_type: Some(ReminderTargetDto::NonRegistered),
        stage_id: None,
    }
}

/// Expect invites to reach owners with a deliverable phone only
///
/// Expected: 200 OK, 2 proxy calls, 2 stored invites, cost at the kakao price
#[tokio::test]
async fn invites_reachable_owners() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_owner_tables()
        .with_alimtalk_tables()
        .with_mock_union()
        .with_template(REGISTER_INVITE_TEMPLATE, TemplateStatus::Approved, true)
        .with_pricing(MessageType::Kakao, 9.0, Utc::now().naive_utc() - Duration::days(1))
        .with_send_message_endpoint(json!({"success": true, "channel": "KAKAO"}), 2)
        .build()
        .await?;
    test.owner()
        .insert_owner(1, "홍길동", Some("010-1234-5678"), None)
        .await?;
    test.owner()
        .insert_owner(1, "김영수", Some("01098765432"), None)
        .await?;
    test.owner()
        .insert_owner(1, "박민지", Some("123"), None)
        .await?;

    let result = send_consent_reminder(State(test.into_app_state()), ApiJson(invite_request())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["templateCode"], REGISTER_INVITE_TEMPLATE);
    assert_eq!(body["recipientCount"], 2);
    assert_eq!(body["kakaoSuccessCount"], 2);
    assert_eq!(body["smsSuccessCount"], 0);
    assert_eq!(body["failCount"], 0);
    assert_eq!(body["estimatedCost"], 18.0);

    let invites = entity::prelude::MemberInvite::find().all(&test.db).await?;
    assert_eq!(invites.len(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect messages the provider delivered by SMS to be counted as SMS
///
/// Expected: 200 OK with smsSuccessCount 1
#[tokio::test]
async fn counts_sms_failover() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_owner_tables()
        .with_alimtalk_tables()
        .with_mock_union()
        .with_template(REGISTER_INVITE_TEMPLATE, TemplateStatus::Approved, true)
        .with_send_message_endpoint(json!({"success": true, "channel": "SMS"}), 1)
        .build()
        .await?;
    test.owner()
        .insert_owner(1, "홍길동", Some("010-1234-5678"), None)
        .await?;

    let result = send_consent_reminder(State(test.into_app_state()), ApiJson(invite_request())).await;

    let body = body_json(result.into_response()).await;
    assert_eq!(body["kakaoSuccessCount"], 0);
    assert_eq!(body["smsSuccessCount"], 1);
    test.assert_mocks();

    Ok(())
}

/// Expect rejected deliveries to be counted as failures and logged
///
/// Expected: 200 OK with failCount 1 and one send log
#[tokio::test]
async fn counts_failed_delivery() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_owner_tables()
        .with_alimtalk_tables()
        .with_mock_union()
        .with_template(REGISTER_INVITE_TEMPLATE, TemplateStatus::Approved, false)
        .with_send_message_endpoint(json!({"success": false, "error": "blocked"}), 1)
        .build()
        .await?;
    test.owner()
        .insert_owner(1, "홍길동", Some("010-1234-5678"), None)
        .await?;

    let result = send_consent_reminder(State(test.into_app_state()), ApiJson(invite_request())).await;

    let body = body_json(result.into_response()).await;
    assert_eq!(body["failCount"], 1);
    let logs = entity::prelude::AlimtalkLog::find().all(&test.db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].fail_count, 1);

    Ok(())
}

/// Expect a NON_AGREED request without stage to be rejected before sending
///
/// Expected: 400 Bad Request, no proxy calls
#[tokio::test]
async fn requires_stage_for_non_agreed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .with_alimtalk_tables()
        .with_mock_union()
        .with_template(CONSENT_REMINDER_TEMPLATE, TemplateStatus::Approved, true)
        .with_send_message_endpoint(json!({"success": true}), 0)
        .build()
        .await?;

    let result = send_consent_reminder(
        State(test.into_app_state()),
        ApiJson(ConsentReminderRequestDto {
            union_id: Some(1),
            target_type: Some(ReminderTargetDto::NonAgreed),
            stage_id: None,
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect an unknown union to be reported as missing
///
/// Expected: 404 Not Found
#[tokio::test]
async fn fails_for_missing_union() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .with_alimtalk_tables()
        .build()
        .await?;

    let result = send_consent_reminder(State(test.into_app_state()), ApiJson(invite_request())).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
