use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alimtalk::{
            AlimtalkLogListDto, AlimtalkTemplateDto, ConsentReminderRequestDto,
            ConsentReminderResultDto, CreatePricingDto, PricingDto, PricingOverviewDto,
            UpsertAlimtalkTemplateDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::util::json::ApiJson,
        error::Error,
        model::app::AppState,
        service::alimtalk::{
            log::AlimtalkLogService, pricing::AlimtalkPricingService, reminder::ReminderService,
            template::AlimtalkTemplateService,
        },
    },
};

/// OpenAPI tag of the alimtalk endpoints
pub static ALIMTALK_TAG: &str = "alimtalk";

/// Send a consent reminder to owners of a union
///
/// `NON_AGREED` targets owners without an agreement at `stageId`, `NON_REGISTERED` targets
/// owners that have not registered and sends them an invite link. Owners without a phone
/// number of at least 10 digits are skipped.
#[utoipa::path(
    post,
    path = "/api/alimtalk/consent-reminder",
    tag = ALIMTALK_TAG,
    request_body = ConsentReminderRequestDto,
    responses(
        (status = 200, description = "Dispatch finished and logged", body = ConsentReminderResultDto),
        (status = 400, description = "Missing field or template not approved", body = ErrorDto),
        (status = 404, description = "Union, stage or template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_consent_reminder(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ConsentReminderRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let service = ReminderService::new(&state.db, &state.proxy, &state.public_base_url);

    let result = service.send(request).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Current unit prices and the full price history
#[utoipa::path(
    get,
    path = "/api/admin/alimtalk/pricing",
    tag = ALIMTALK_TAG,
    responses(
        (status = 200, description = "Prices in effect now and history, newest first", body = PricingOverviewDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pricing(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let overview = AlimtalkPricingService::new(&state.db).overview().await?;

    Ok((StatusCode::OK, Json(overview)))
}

/// Add a unit price, effective now unless `effectiveFrom` is given
#[utoipa::path(
    post,
    path = "/api/admin/alimtalk/pricing",
    tag = ALIMTALK_TAG,
    request_body = CreatePricingDto,
    responses(
        (status = 201, description = "Price added", body = PricingDto),
        (status = 400, description = "Negative unit price", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pricing(
    State(state): State<AppState>,
    ApiJson(pricing): ApiJson<CreatePricingDto>,
) -> Result<impl IntoResponse, Error> {
    let pricing = AlimtalkPricingService::new(&state.db).create(pricing).await?;

    Ok((StatusCode::CREATED, Json(pricing)))
}

/// Send logs of a union with aggregate statistics
#[utoipa::path(
    get,
    path = "/api/unions/{union}/alimtalk/logs",
    tag = ALIMTALK_TAG,
    params(("union" = i32, Path, description = "Union id")),
    responses(
        (status = 200, description = "Logs newest first with statistics", body = AlimtalkLogListDto),
        (status = 404, description = "Union not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_union_logs(
    State(state): State<AppState>,
    Path(union_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let logs = AlimtalkLogService::new(&state.db)
        .list(Some(union_id))
        .await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// Send logs of every union with aggregate statistics
#[utoipa::path(
    get,
    path = "/api/admin/alimtalk/logs",
    tag = ALIMTALK_TAG,
    responses(
        (status = 200, description = "Logs newest first with statistics", body = AlimtalkLogListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_logs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let logs = AlimtalkLogService::new(&state.db).list(None).await?;

    Ok((StatusCode::OK, Json(logs)))
}

#[utoipa::path(
    get,
    path = "/api/admin/alimtalk/templates",
    tag = ALIMTALK_TAG,
    responses(
        (status = 200, description = "Registered templates", body = Vec<AlimtalkTemplateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
/// List registered alimtalk templates
pub async fn list_templates(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let templates = AlimtalkTemplateService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(templates)))
}

/// Register a template or replace the one with the same code
#[utoipa::path(
    put,
    path = "/api/admin/alimtalk/templates",
    tag = ALIMTALK_TAG,
    request_body = UpsertAlimtalkTemplateDto,
    responses(
        (status = 200, description = "Template stored", body = AlimtalkTemplateDto),
        (status = 400, description = "Blank template code or name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_template(
    State(state): State<AppState>,
    ApiJson(template): ApiJson<UpsertAlimtalkTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let template = AlimtalkTemplateService::new(&state.db)
        .upsert(template)
        .await?;

    Ok((StatusCode::OK, Json(template)))
}
