//! Uniform response envelope returned by controllers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::account::Account;

/// Request-level error descriptor, serialized into the envelope body.
///
/// Carries the offending field name for the 400 kinds; `ServerError`
/// deliberately carries nothing so no internal detail can leak.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum RequestError {
    #[error("missing param: {param}")]
    MissingParam { param: &'static str },

    #[error("invalid param: {param}")]
    InvalidParam { param: &'static str },

    #[error("internal server error")]
    ServerError,
}

impl RequestError {
    /// A required field was absent or empty.
    pub fn missing(param: &'static str) -> Self {
        Self::MissingParam { param }
    }

    /// A field was present but failed a semantic check.
    pub fn invalid(param: &'static str) -> Self {
        Self::InvalidParam { param }
    }
}

/// Envelope body: either an error descriptor or an account record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Error(RequestError),
    Account(Account),
}

/// `{statusCode, body}` pair returned by every controller outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Body,
}

/// `400` with the given error descriptor as body.
pub fn bad_request(error: RequestError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: Body::Error(error),
    }
}

/// `200` with the account record as body.
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: Body::Account(account),
    }
}

/// `500` with an opaque error descriptor.
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: Body::Error(RequestError::ServerError),
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
