use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request validation failures, returned to the client as 400 with the message as body.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// `unionId` missing
    #[error("조합 ID가 필요합니다.")]
    MissingUnionId,
    /// `stageId` missing
    #[error("동의 단계 ID가 필요합니다.")]
    MissingStageId,
    /// Upload `data` missing or empty
    #[error("업로드할 데이터가 없습니다.")]
    EmptyUploadData,
    /// `targetType` missing
    #[error("발송 대상 유형이 필요합니다.")]
    MissingTargetType,
    /// Template exists but is not approved
    #[error("승인되지 않은 알림톡 템플릿입니다: {0}")]
    TemplateNotApproved(String),
    /// Slug contains characters other than `[a-z0-9-]`
    #[error("슬러그는 영문 소문자, 숫자, '-'만 사용할 수 있습니다: {0:?}")]
    InvalidSlug(String),
    /// Slug used by another union
    #[error("이미 사용 중인 슬러그입니다: {0}")]
    DuplicateSlug(String),
    /// A field failed a value check
    #[error("{field}: {reason}")]
    InvalidField {
        /// Field name as sent by the client
        field: String,
        /// What is wrong with the value
        reason: String,
    },
    /// Body is not valid JSON for the endpoint
    #[error("요청 본문을 해석할 수 없습니다: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
