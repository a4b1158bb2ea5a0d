//! Helpers shared by the JSON API handlers.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::Error;

/// The body of a successful response that has no record to return.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// A description of what happened.
    pub message: String,
}

impl MessageBody {
    /// Create a JSON message body.
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_owned(),
        })
    }
}

/// Unwrap a JSON request body, turning any extractor rejection into [Error::InvalidJson].
///
/// Handlers take `Result<Json<T>, JsonRejection>` so that malformed bodies get
/// the same error shape as every other API error instead of axum's plain text.
pub fn parse_json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!("Rejected JSON request body: {rejection}");
            Err(Error::InvalidJson(rejection.body_text()))
        }
    }
}
