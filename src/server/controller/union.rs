use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        union::{CreateUnionDto, UnionDto, UpdateUnionDto},
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::union::UnionService,
    },
};

/// OpenAPI tag of the union endpoints
pub static UNION_TAG: &str = "union";

/// Create a union
#[utoipa::path(
    post,
    path = "/api/admin/unions",
    tag = UNION_TAG,
    request_body = CreateUnionDto,
    responses(
        (status = 201, description = "Union created", body = UnionDto),
        (status = 400, description = "Invalid or duplicate slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_union(
    State(state): State<AppState>,
    ApiJson(union): ApiJson<CreateUnionDto>,
) -> Result<impl IntoResponse, Error> {
    let union = UnionService::new(&state.db).create(union).await?;

    Ok((StatusCode::CREATED, Json(union)))
}

/// List every union, disabled ones included
#[utoipa::path(
    get,
    path = "/api/admin/unions",
    tag = UNION_TAG,
    responses(
        (status = 200, description = "Unions in creation order", body = Vec<UnionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let unions = UnionService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(unions)))
}

/// Look up an active union by slug
#[utoipa::path(
    get,
    path = "/api/unions/{union}",
    tag = UNION_TAG,
    params(("union" = String, Path, description = "Union slug")),
    responses(
        (status = 200, description = "Active union", body = UnionDto),
        (status = 404, description = "No active union with this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_union_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let union = UnionService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(union)))
}

/// Update a union; absent fields are left unchanged
#[utoipa::path(
    patch,
    path = "/api/admin/unions/{id}",
    tag = UNION_TAG,
    params(("id" = i32, Path, description = "Union id")),
    request_body = UpdateUnionDto,
    responses(
        (status = 200, description = "Union updated", body = UnionDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Union not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_union(
    State(state): State<AppState>,
    Path(union_id): Path<i32>,
    ApiJson(changes): ApiJson<UpdateUnionDto>,
) -> Result<impl IntoResponse, Error> {
    let union = UnionService::new(&state.db)
        .update(union_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(union)))
}

/// Disable a union; its data is kept
#[utoipa::path(
    delete,
    path = "/api/admin/unions/{id}",
    tag = UNION_TAG,
    params(("id" = i32, Path, description = "Union id")),
    responses(
        (status = 200, description = "Union disabled", body = UnionDto),
        (status = 404, description = "Union not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disable_union(
    State(state): State<AppState>,
    Path(union_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let union = UnionService::new(&state.db).disable(union_id).await?;

    Ok((StatusCode::OK, Json(union)))
}
