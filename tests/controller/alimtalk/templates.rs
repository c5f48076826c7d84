//! Tests for the template registry endpoints.

use entity::sea_orm_active_enums::TemplateStatus;
use unionhub::{
    model::alimtalk::UpsertAlimtalkTemplateDto,
    server::controller::alimtalk::{list_templates, upsert_template},
};

use super::*;

/// Expect an upserted template to replace the existing one with the same code
///
/// Expected: 200 OK, a single APPROVED template listed
#[tokio::test]
async fn upserts_and_lists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_alimtalk_tables()
        .with_template("CONSENT_REMINDER", TemplateStatus::Pending, false)
        .build()
        .await?;

    let result = upsert_template(
        State(test.into_app_state()),
        ApiJson(UpsertAlimtalkTemplateDto {
            template_code: "CONSENT_REMINDER".to_string(),
            name: "동의 독려".to_string(),
            content: "#{소유자명}님, #{동의단계}에 동의해 주세요.".to_string(),
            status: Some(TemplateStatus::Approved),
            lms_failover: true,
        }),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let listed = list_templates(State(test.into_app_state())).await;
    let body = body_json(listed.into_response()).await;
    let templates = body.as_array().expect("template list");
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["status"], "APPROVED");
    assert_eq!(templates[0]["lmsFailover"], true);

    Ok(())
}

/// Expect a template without name to be rejected
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_alimtalk_tables().build().await?;

    let result = upsert_template(
        State(test.into_app_state()),
        ApiJson(UpsertAlimtalkTemplateDto {
            template_code: "REGISTER_INVITE".to_string(),
            name: " ".to_string(),
            content: "#{초대링크}".to_string(),
            status: None,
            lms_failover: false,
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}
