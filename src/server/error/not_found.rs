use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Referenced resources that do not exist, returned to the client as 404.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// Union by id
    #[error("조합을 찾을 수 없습니다. (id: {0})")]
    Union(i32),
    /// Active union by slug
    #[error("조합을 찾을 수 없습니다. (slug: {0})")]
    UnionSlug(String),
    /// Consent stage, or a stage of another union
    #[error("동의 단계를 찾을 수 없습니다. (id: {0})")]
    ConsentStage(i32),
    /// Sync job by id
    #[error("작업을 찾을 수 없습니다. (id: {0})")]
    SyncJob(i32),
    /// Template by code
    #[error("알림톡 템플릿을 찾을 수 없습니다: {0}")]
    Template(String),
    /// Owner, or an owner of another union
    #[error("소유자를 찾을 수 없습니다. (id: {0})")]
    Owner(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
