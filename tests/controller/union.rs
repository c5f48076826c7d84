//! Tests for the union administration endpoints.

use axum::extract::Path;
use unionhub::{
    model::union::{CreateUnionDto, UpdateUnionDto},
    server::controller::union::{
        create_union, disable_union, get_union_by_slug, list_unions, update_union,
    },
};

use super::*;

fn new_union(slug: &str) -> CreateUnionDto {
    CreateUnionDto {
        name: "한빛 재건축조합".to_string(),
        slug: slug.to_string(),
        phone: Some("02-555-0101".to_string()),
        business_hours: None,
        kakao_channel_id: None,
    }
}

/// Expect a created union to be listed and found by slug
///
/// Expected: 201 Created, then 200 OK for list and slug lookup
#[tokio::test]
async fn creates_and_finds_union() -> Result<(), TestError> {
    let test = TestBuilder::new().with_union_tables().build().await?;

    let created = create_union(State(test.into_app_state()), ApiJson(new_union("hanbit"))).await;
    let resp = created.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["slug"], "hanbit");
    assert_eq!(body["isActive"], true);

    let listed = list_unions(State(test.into_app_state())).await;
    let body = body_json(listed.into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let found = get_union_by_slug(State(test.into_app_state()), Path("hanbit".to_string())).await;
    assert_eq!(found.into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect a duplicate slug to be rejected
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_union_tables()
        .with_mock_union()
        .build()
        .await?;

    let result = create_union(State(test.into_app_state()), ApiJson(new_union(TEST_UNION_SLUG))).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a slug with uppercase letters to be rejected
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_invalid_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_union_tables().build().await?;

    let result = create_union(State(test.into_app_state()), ApiJson(new_union("Han Bit"))).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a partial update to leave absent fields unchanged
///
/// Expected: 200 OK with the new phone and the original name
#[tokio::test]
async fn updates_given_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_union_tables()
        .with_mock_union()
        .build()
        .await?;

    let result = update_union(
        State(test.into_app_state()),
        Path(1),
        ApiJson(UpdateUnionDto {
            phone: Some("02-999-0000".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["name"], TEST_UNION_NAME);
    assert_eq!(body["phone"], "02-999-0000");

    Ok(())
}

/// Expect a disabled union to disappear from slug lookup
///
/// Expected: 200 OK on disable, then 404 Not Found by slug
#[tokio::test]
async fn disabled_union_is_hidden() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_union_tables()
        .with_mock_union()
        .build()
        .await?;

    let disabled = disable_union(State(test.into_app_state()), Path(1)).await;
    let resp = disabled.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["isActive"], false);

    let found = get_union_by_slug(
        State(test.into_app_state()),
        Path(TEST_UNION_SLUG.to_string()),
    )
    .await;
    assert_eq!(found.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect updating an unknown union to fail
///
/// Expected: 404 Not Found
#[tokio::test]
async fn update_fails_for_missing_union() -> Result<(), TestError> {
    let test = TestBuilder::new().with_union_tables().build().await?;

    let result = update_union(
        State(test.into_app_state()),
        Path(5),
        ApiJson(UpdateUnionDto::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
