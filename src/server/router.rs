//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json`, with Swagger UI at
/// `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/consent/bulk-upload` - Apply an uploaded consent sheet
/// - `GET|POST /api/unions/{union}/consent-stages` - List or add consent stages
/// - `GET /api/unions/{union}/consent-stages/{stage_id}/summary` - Consent counts at a stage
/// - `PUT /api/unions/{union}/owners/{owner_id}/consents/{stage_id}` - Record owner consent
/// - `POST /api/alimtalk/consent-reminder` - Send a consent reminder
/// - `GET /api/unions/{union}/alimtalk/logs` - Send logs of a union
/// - `GET /api/admin/alimtalk/logs` - Send logs of every union
/// - `GET|POST /api/admin/alimtalk/pricing` - Unit prices
/// - `GET|PUT /api/admin/alimtalk/templates` - Template registry
/// - `GET|POST /api/admin/unions` - List or create unions
/// - `PATCH|DELETE /api/admin/unions/{id}` - Update or disable a union
/// - `GET /api/unions/{union}` - Active union by slug
/// - `GET /api/sync-jobs/{id}` - Poll a tracked job
///
/// Routes under `/api/unions/` share the `{union}` segment name; it holds the slug for the
/// union lookup and the numeric union id everywhere else.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, proxy, public_base_url };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "unionhub", description = "unionhub API"), tags(
        (name = controller::consent::CONSENT_TAG, description = "Consent stages and bulk consent uploads"),
        (name = controller::alimtalk::ALIMTALK_TAG, description = "Alimtalk reminders, templates, pricing and send logs"),
        (name = controller::union::UNION_TAG, description = "Union administration"),
        (name = controller::sync_job::SYNC_JOB_TAG, description = "Tracked long-running jobs"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::consent::bulk_upload))
        .routes(routes!(
            controller::consent::list_stages,
            controller::consent::create_stage
        ))
        .routes(routes!(controller::consent::stage_summary))
        .routes(routes!(controller::consent::record_owner_consent))
        .routes(routes!(controller::alimtalk::send_consent_reminder))
        .routes(routes!(controller::alimtalk::list_union_logs))
        .routes(routes!(controller::alimtalk::list_all_logs))
        .routes(routes!(
            controller::alimtalk::get_pricing,
            controller::alimtalk::create_pricing
        ))
        .routes(routes!(
            controller::alimtalk::list_templates,
            controller::alimtalk::upsert_template
        ))
        .routes(routes!(
            controller::union::list_unions,
            controller::union::create_union
        ))
        .routes(routes!(
            controller::union::update_union,
            controller::union::disable_union
        ))
        .routes(routes!(controller::union::get_union_by_slug))
        .routes(routes!(controller::sync_job::get_sync_job))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
