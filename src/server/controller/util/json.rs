use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// JSON request body whose rejections are reported as 400 [`ErrorDto`](crate::model::api::ErrorDto).
///
/// Wraps [`Json`], so the content type and body checks are the same; only the rejection
/// changes from axum's plain-text 4xx to [`Error::ValidationError`].
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
        http::{header, StatusCode},
        response::IntoResponse,
    };

    use super::ApiJson;
    use crate::model::consent::BulkUploadRequestDto;

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn mistyped_body_is_bad_request() {
        let result =
            ApiJson::<BulkUploadRequestDto>::from_request(request(r#"{"unionId":"one"}"#), &())
                .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn accepts_null_fields() {
        let result = ApiJson::<BulkUploadRequestDto>::from_request(
            request(r#"{"unionId":1,"stageId":1,"data":[{"name":"a","status":null}]}"#),
            &(),
        )
        .await;

        let ApiJson(body) = result.unwrap();
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].status, "");
    }
}
