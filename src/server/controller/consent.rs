use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        consent::{
            BulkUploadRequestDto, BulkUploadResponseDto, ConsentStageDto, ConsentSummaryDto,
            CreateConsentStageDto, OwnerConsentDto, RecordOwnerConsentDto,
        },
    },
    server::{
        controller::util::json::ApiJson,
        error::Error,
        model::app::AppState,
        service::consent::{
            bulk_upload::BulkUploadService, owner::OwnerConsentService, stage::ConsentStageService,
        },
    },
};

/// OpenAPI tag of the consent endpoints
pub static CONSENT_TAG: &str = "consent";

/// Apply an uploaded consent sheet to the members of a union
///
/// Batches below 50 rows are processed immediately and answered with their counts. Larger
/// batches are tracked by a sync job whose id is returned; poll `/api/sync-jobs/{id}` for
/// progress.
#[utoipa::path(
    post,
    path = "/api/consent/bulk-upload",
    tag = CONSENT_TAG,
    request_body = BulkUploadRequestDto,
    responses(
        (status = 200, description = "Batch processed or queued", body = BulkUploadResponseDto),
        (status = 400, description = "Union id, stage id or rows missing, or malformed body", body = ErrorDto),
        (status = 404, description = "Union or stage not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_upload(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BulkUploadRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let service = BulkUploadService::new(&state.db, &state.proxy);

    let response = service.upload(request).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List the consent stages of a union
#[utoipa::path(
    get,
    path = "/api/unions/{union}/consent-stages",
    tag = CONSENT_TAG,
    params(("union" = i32, Path, description = "Union id")),
    responses(
        (status = 200, description = "Stages in display order", body = Vec<ConsentStageDto>),
        (status = 404, description = "Union not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_stages(
    State(state): State<AppState>,
    Path(union_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let stages = ConsentStageService::new(&state.db).list(union_id).await?;

    Ok((StatusCode::OK, Json(stages)))
}

/// Add a consent stage to a union
#[utoipa::path(
    post,
    path = "/api/unions/{union}/consent-stages",
    tag = CONSENT_TAG,
    params(("union" = i32, Path, description = "Union id")),
    request_body = CreateConsentStageDto,
    responses(
        (status = 201, description = "Stage created", body = ConsentStageDto),
        (status = 400, description = "Blank stage name", body = ErrorDto),
        (status = 404, description = "Union not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_stage(
    State(state): State<AppState>,
    Path(union_id): Path<i32>,
    ApiJson(stage): ApiJson<CreateConsentStageDto>,
) -> Result<impl IntoResponse, Error> {
    let stage = ConsentStageService::new(&state.db)
        .create(union_id, stage)
        .await?;

    Ok((StatusCode::CREATED, Json(stage)))
}

/// Consent counts of the matchable members at a stage
#[utoipa::path(
    get,
    path = "/api/unions/{union}/consent-stages/{stage_id}/summary",
    tag = CONSENT_TAG,
    params(
        ("union" = i32, Path, description = "Union id"),
        ("stage_id" = i32, Path, description = "Consent stage id")
    ),
    responses(
        (status = 200, description = "Agreed, disagreed and pending counts", body = ConsentSummaryDto),
        (status = 404, description = "Stage not found in union", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stage_summary(
    State(state): State<AppState>,
    Path((union_id, stage_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let summary = ConsentStageService::new(&state.db)
        .summary(union_id, stage_id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Record an owner's consent at a stage
#[utoipa::path(
    put,
    path = "/api/unions/{union}/owners/{owner_id}/consents/{stage_id}",
    tag = CONSENT_TAG,
    params(
        ("union" = i32, Path, description = "Union id"),
        ("owner_id" = i32, Path, description = "Owner id"),
        ("stage_id" = i32, Path, description = "Consent stage id")
    ),
    request_body = RecordOwnerConsentDto,
    responses(
        (status = 200, description = "Consent stored", body = OwnerConsentDto),
        (status = 404, description = "Owner or stage not found in union", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_owner_consent(
    State(state): State<AppState>,
    Path((union_id, owner_id, stage_id)): Path<(i32, i32, i32)>,
    ApiJson(consent): ApiJson<RecordOwnerConsentDto>,
) -> Result<impl IntoResponse, Error> {
    let consent = OwnerConsentService::new(&state.db)
        .record(union_id, owner_id, stage_id, consent.status)
        .await?;

    Ok((StatusCode::OK, Json(consent)))
}
