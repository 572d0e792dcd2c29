//! Classification of request failures.
//!
//! Every error that reaches the HTTP boundary is sorted into one of three
//! kinds. Domain errors are sorted by their [`ErrorCode`].

use actix_web::http::StatusCode;
use serde_json::{Map, Value, json};

use crate::domain::{Error, ErrorCode};

use super::error::status_for;

/// A failure as the error translator sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// An error that carries its own status and client-facing payload.
    Http {
        /// Status to respond with.
        status: StatusCode,
        /// Payload to respond with.
        payload: Value,
    },
    /// The store rejected a record; `message` may span several lines.
    Validation {
        /// Raw rejection report.
        message: String,
    },
    /// Anything uncategorised. Its contents never reach the client.
    Unknown,
}

impl Failure {
    /// Build an HTTP-style failure with the conventional payload shape
    /// `{"statusCode", "message", "error"}` plus optional `details`.
    ///
    /// # Examples
    /// ```
    /// use actix_web::http::StatusCode;
    /// use user_registry::inbound::http::Failure;
    /// use serde_json::json;
    ///
    /// let failure = Failure::http(StatusCode::NOT_FOUND, "User Not Found", None);
    /// assert_eq!(
    ///     failure,
    ///     Failure::Http {
    ///         status: StatusCode::NOT_FOUND,
    ///         payload: json!({
    ///             "statusCode": 404,
    ///             "message": "User Not Found",
    ///             "error": "Not Found"
    ///         }),
    ///     }
    /// );
    /// ```
    #[must_use]
    pub fn http(status: StatusCode, message: &str, details: Option<&Value>) -> Self {
        let mut payload = Map::new();
        payload.insert("statusCode".to_owned(), json!(status.as_u16()));
        payload.insert("message".to_owned(), json!(message));
        payload.insert(
            "error".to_owned(),
            json!(status.canonical_reason().unwrap_or("Error")),
        );
        if let Some(details) = details {
            payload.insert("details".to_owned(), details.clone());
        }
        Self::Http {
            status,
            payload: Value::Object(payload),
        }
    }

    /// Classify a domain error.
    #[must_use]
    pub fn from_domain(error: &Error) -> Self {
        match error.code() {
            ErrorCode::ValidationFailed => Self::Validation {
                message: error.message().to_owned(),
            },
            ErrorCode::InternalError => Self::Unknown,
            code @ (ErrorCode::InvalidRequest | ErrorCode::NotFound) => {
                Self::http(status_for(code), error.message(), error.details())
            }
        }
    }

    /// Classify an error surfaced through actix.
    ///
    /// Domain errors are classified by code. Other framework errors with a
    /// client-error status keep their status and display message; the rest
    /// are unknown.
    #[must_use]
    pub fn from_actix(error: &actix_web::Error) -> Self {
        if let Some(domain) = error.as_error::<Error>() {
            return Self::from_domain(domain);
        }
        let status = error.as_response_error().status_code();
        if status.is_client_error() {
            Self::http(status, &error.to_string(), None)
        } else {
            Self::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::{ErrorBadRequest, ErrorInternalServerError, ErrorMethodNotAllowed};
    use rstest::rstest;

    #[rstest]
    fn not_found_keeps_its_status_and_payload() {
        let failure = Failure::from_domain(&Error::not_found("User Not Found"));
        assert_eq!(
            failure,
            Failure::Http {
                status: StatusCode::NOT_FOUND,
                payload: json!({
                    "statusCode": 404,
                    "message": "User Not Found",
                    "error": "Not Found"
                }),
            }
        );
    }

    #[rstest]
    fn invalid_request_carries_details() {
        let error = Error::invalid_request("bad id").with_details(json!({ "field": "id" }));
        let Failure::Http { status, payload } = Failure::from_domain(&error) else {
            panic!("expected an HTTP-style failure");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.get("details"), Some(&json!({ "field": "id" })));
    }

    #[rstest]
    fn validation_failures_keep_the_raw_message() {
        let failure = Failure::from_domain(&Error::validation_failed("bad\ninput"));
        assert_eq!(
            failure,
            Failure::Validation {
                message: "bad\ninput".to_owned()
            }
        );
    }

    #[rstest]
    fn internal_domain_errors_are_unknown() {
        assert_eq!(Failure::from_domain(&Error::internal("boom")), Failure::Unknown);
    }

    #[rstest]
    fn actix_wrapped_domain_errors_are_unwrapped() {
        let wrapped = actix_web::Error::from(Error::not_found("User Not Found"));
        assert!(matches!(
            Failure::from_actix(&wrapped),
            Failure::Http {
                status: StatusCode::NOT_FOUND,
                ..
            }
        ));
    }

    #[rstest]
    #[case(ErrorBadRequest("malformed"), StatusCode::BAD_REQUEST)]
    #[case(ErrorMethodNotAllowed("nope"), StatusCode::METHOD_NOT_ALLOWED)]
    fn framework_client_errors_keep_their_status(
        #[case] error: actix_web::Error,
        #[case] expected: StatusCode,
    ) {
        let Failure::Http { status, .. } = Failure::from_actix(&error) else {
            panic!("expected an HTTP-style failure");
        };
        assert_eq!(status, expected);
    }

    #[rstest]
    fn framework_server_errors_are_unknown() {
        let error = ErrorInternalServerError("database exploded");
        assert_eq!(Failure::from_actix(&error), Failure::Unknown);
    }
}
