//! Request body extractor for the create endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A request body parsed as loosely-shaped JSON.
///
/// An empty body becomes `{}` so that a bare POST is reported as missing its
/// fields rather than rejected outright. The `Content-Type` header is not
/// inspected. Bodies that are not valid JSON, or whose top level is a bare
/// scalar rather than an object or array, are rejected with 400.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

        match value {
            Value::Object(_) | Value::Array(_) => Ok(JsonBody(value)),
            _ => Err(AppError::BadRequest(
                "Malformed JSON body: top level must be an object or array".to_string(),
            )),
        }
    }
}
