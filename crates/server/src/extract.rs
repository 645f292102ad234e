//! Request body extractor for company creation.
//!
//! Accepts JSON or url-encoded forms. An empty body is an empty field set so
//! that missing fields are reported per field instead of as a parse failure.

use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};
use service::company::{domain, CreateCompanyInput};

use crate::errors::ApiError;

/// Largest create body accepted, enforced through `DefaultBodyLimit` on the routes.
pub const BODY_LIMIT: usize = 64 * 1024;

pub struct CompanyPayload(pub CreateCompanyInput);

#[async_trait]
impl<S> FromRequest<S> for CompanyPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let headers = req.headers().clone();
        let mime = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase());

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge(format!("Request body exceeds {BODY_LIMIT} bytes."))
            } else {
                ApiError::Malformed(format!("Could not read request body - {}", e.body_text()))
            }
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(CreateCompanyInput::default()));
        }

        match mime.as_deref() {
            None | Some("application/json") => {
                let value: serde_json::Value = serde_json::from_slice(&bytes)
                    .map_err(|e| ApiError::Malformed(format!("JSON parse error - {e}")))?;
                // 标量转成字符串，数组/对象按字段报错
                Ok(Self(domain::input_from_json(value).map_err(ApiError::Validation)?))
            }
            Some("application/x-www-form-urlencoded") => {
                let mut req = Request::new(Body::from(bytes));
                *req.method_mut() = method;
                *req.headers_mut() = headers;
                let Form(input) = Form::<CreateCompanyInput>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Malformed(format!("Malformed form data - {}", e.body_text())))?;
                Ok(Self(input))
            }
            Some(other) => Err(ApiError::UnsupportedMediaType(other.to_string())),
        }
    }
}
