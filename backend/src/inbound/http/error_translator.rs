//! Uniform error envelopes for failed requests.
//!
//! [`ErrorTranslator`] turns a [`Failure`] into an [`ErrorEnvelope`], writes
//! it as the JSON response body and logs the payload:
//!
//! | Failure            | `statusCode`      | `response`                         |
//! |--------------------|-------------------|------------------------------------|
//! | `Http`             | its own status    | its own payload                    |
//! | `Validation`       | 422               | message with line breaks removed   |
//! | `Unknown`          | 500               | `"Internal Server Error"`          |

use std::fmt;
use std::sync::Arc;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use chrono::SecondsFormat;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{TRACE_ID_HEADER, TraceId};

use super::failure::Failure;

/// Name recorded on every log event the translator emits.
pub const TRANSLATOR_NAME: &str = "ErrorTranslator";

/// Payload returned for failures that must not leak details.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Description of what went wrong: a plain message or a structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// Plain message.
    Message(String),
    /// Structured payload supplied by the failure itself.
    Structured(Value),
}

impl fmt::Display for ResponsePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

/// Body sent to the client for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status of the response.
    #[schema(example = 404)]
    pub status_code: u16,
    /// ISO-8601 UTC instant at which the failure was translated.
    #[schema(example = "2026-02-24T10:30:00.000Z")]
    pub timestamp: String,
    /// Path (and query) of the failing request.
    #[schema(example = "/users/999")]
    pub path: String,
    /// Failure description.
    #[schema(value_type = Object)]
    pub response: ResponsePayload,
}

impl ErrorEnvelope {
    /// Status as an actix [`StatusCode`].
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Replace every run of line breaks with a single space.
///
/// # Examples
/// ```
/// use user_registry::inbound::http::error_translator::strip_line_breaks;
///
/// assert_eq!(strip_line_breaks("bad\ninput"), "bad input");
/// assert_eq!(strip_line_breaks("a:\n\nb\r\nc"), "a: b c");
/// ```
#[must_use]
pub fn strip_line_breaks(message: &str) -> String {
    message
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stateless failure-to-envelope mapping with an injectable clock.
#[derive(Clone)]
pub struct ErrorTranslator {
    clock: Arc<dyn Clock>,
}

impl ErrorTranslator {
    /// Create a translator reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Build the envelope for `failure` raised while serving `request_path`.
    #[must_use]
    pub fn translate_failure(&self, failure: Failure, request_path: &str) -> ErrorEnvelope {
        let (status, response) = match failure {
            Failure::Http { status, payload } => (status, ResponsePayload::Structured(payload)),
            Failure::Validation { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ResponsePayload::Message(strip_line_breaks(&message)),
            ),
            Failure::Unknown => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponsePayload::Message(INTERNAL_SERVER_ERROR_MESSAGE.to_owned()),
            ),
        };
        ErrorEnvelope {
            status_code: status.as_u16(),
            timestamp: self
                .clock
                .utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            path: request_path.to_owned(),
            response,
        }
    }

    /// Translate `failure` into a fresh JSON response and log it.
    pub fn respond(&self, failure: Failure, request_path: &str) -> HttpResponse {
        let envelope = self.translate_failure(failure, request_path);
        let response = HttpResponse::build(envelope.status()).json(&envelope);
        log_envelope(&envelope);
        response
    }

    /// Translate `failure` into an error that renders as its envelope.
    ///
    /// Used when no response exists to rewrite, such as an `Err` returned by
    /// inner middleware. The framework renders the returned error.
    pub fn reject(&self, failure: Failure, request_path: &str) -> actix_web::Error {
        let envelope = self.translate_failure(failure, request_path);
        log_envelope(&envelope);
        RenderedFailure {
            envelope,
            trace_id: TraceId::current(),
        }
        .into()
    }

    /// Rewrite an error `response` in place: status and body become the
    /// envelope, while headers and the attached framework error are kept for
    /// outer middleware.
    pub fn rewrite<B>(
        &self,
        mut response: HttpResponse<B>,
        failure: Failure,
        request_path: &str,
    ) -> HttpResponse<BoxBody>
    where
        B: MessageBody + 'static,
    {
        let envelope = self.translate_failure(failure, request_path);
        let body = match serde_json::to_string(&envelope) {
            Ok(body) => body,
            Err(error) => {
                error!(%error, translator = TRANSLATOR_NAME, "failed to encode error envelope");
                return self.respond(Failure::Unknown, request_path);
            }
        };
        response.head_mut().status = envelope.status();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let response = response.set_body(body).map_into_boxed_body();
        log_envelope(&envelope);
        response
    }
}

/// An envelope carried as an `actix_web::Error`.
#[derive(Debug)]
pub struct RenderedFailure {
    envelope: ErrorEnvelope,
    trace_id: Option<TraceId>,
}

impl RenderedFailure {
    /// Envelope rendered for the client.
    #[must_use]
    pub fn envelope(&self) -> &ErrorEnvelope {
        &self.envelope
    }
}

impl fmt::Display for RenderedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.envelope.response, f)
    }
}

impl ResponseError for RenderedFailure {
    fn status_code(&self) -> StatusCode {
        self.envelope.status()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        let trace_header = self
            .trace_id
            .and_then(|id| HeaderValue::from_str(&id.to_string()).ok());
        if let Some(value) = trace_header {
            builder.insert_header((HeaderName::from_static(TRACE_ID_HEADER), value));
        }
        builder.json(&self.envelope)
    }
}

fn log_envelope(envelope: &ErrorEnvelope) {
    let trace_id = TraceId::current().map(|id| id.to_string());
    error!(
        translator = TRANSLATOR_NAME,
        status = envelope.status_code,
        path = %envelope.path,
        trace_id = trace_id.as_deref(),
        response = %envelope.response,
        "{}",
        envelope.response
    );
}
