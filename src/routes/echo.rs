//! Echo endpoint that returns whatever the caller posted.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;

/// Request body, resolved once from the Content-Type header.
///
/// A JSON content type parses as arbitrary JSON and rejects malformed
/// input with 400. Everything else decodes as form-encoded key/value
/// pairs; an empty body yields an empty mapping.
#[derive(Debug, PartialEq)]
pub enum EchoBody {
    Json(Value),
    Form(BTreeMap<String, String>),
}

impl<S> FromRequest<S> for EchoBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(format!("failed to read body: {}", err)))?;

        if is_json {
            let value = serde_json::from_slice(&bytes)
                .map_err(|err| AppError::BadRequest(format!("invalid JSON body: {}", err)))?;
            Ok(Self::Json(value))
        } else {
            let fields = url::form_urlencoded::parse(&bytes)
                .into_owned()
                .collect::<BTreeMap<String, String>>();
            Ok(Self::Form(fields))
        }
    }
}

impl EchoBody {
    fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Form(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: &'static str,
    pub received_data: Value,
    pub timestamp: String,
}

/// Echo handler.
#[instrument(name = "echo::echo", skip_all)]
pub async fn echo(body: EchoBody) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: "Echo response",
        received_data: body.into_value(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
