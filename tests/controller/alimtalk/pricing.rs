//! Tests for the unit price endpoints.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::MessageType;
use unionhub::{
    model::alimtalk::CreatePricingDto,
    server::controller::alimtalk::{create_pricing, get_pricing},
};

use super::*;

/// Expect one current price per message type alongside the history
///
/// Expected: 200 OK with 3 current prices, missing types at 0
#[tokio::test]
async fn reports_current_prices() -> Result<(), TestError> {
    let now = Utc::now().naive_utc();
    let test = TestBuilder::new()
        .with_alimtalk_tables()
        .with_pricing(MessageType::Kakao, 9.0, now - Duration::days(1))
        .with_pricing(MessageType::Kakao, 12.0, now + Duration::days(1))
        .build()
        .await?;

    let result = get_pricing(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let current = body["current"].as_array().expect("current prices");
    assert_eq!(current.len(), 3);
    let kakao = current
        .iter()
        .find(|price| price["messageType"] == "KAKAO")
        .expect("kakao price");
    assert_eq!(kakao["unitPrice"], 9.0);
    let sms = current
        .iter()
        .find(|price| price["messageType"] == "SMS")
        .expect("sms price");
    assert_eq!(sms["unitPrice"], 0.0);
    assert_eq!(body["history"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect a new price row to be created
///
/// Expected: 201 Created
#[tokio::test]
async fn creates_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_alimtalk_tables().build().await?;

    let result = create_pricing(
        State(test.into_app_state()),
        ApiJson(CreatePricingDto {
            message_type: MessageType::Sms,
            unit_price: 20.0,
            effective_from: None,
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["messageType"], "SMS");
    assert_eq!(body["unitPrice"], 20.0);

    Ok(())
}

/// Expect a negative price to be rejected
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_negative_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_alimtalk_tables().build().await?;

    let result = create_pricing(
        State(test.into_app_state()),
        ApiJson(CreatePricingDto {
            message_type: MessageType::Lms,
            unit_price: -5.0,
            effective_from: None,
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}
