//! Extractor configuration for inbound HTTP adapters.
//!
//! Malformed paths, queries and bodies are rejected before a handler runs.
//! The handlers below turn those rejections into domain `InvalidRequest`
//! errors so they are rendered like any other failure. Body errors other
//! than deserialisation, such as an oversized payload, pass through with
//! their own status.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, Role, UserId};

/// Message for a path id that is not a non-negative integer.
pub const NUMERIC_ID_MESSAGE: &str = "Validation failed (numeric string is expected)";

/// Message for an unknown role filter.
#[must_use]
pub fn role_filter_message() -> String {
    let names: Vec<&str> = Role::ALL.iter().map(|role| role.as_str()).collect();
    format!("role must be one of the following values: {}", names.join(", "))
}

fn path_error(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(NUMERIC_ID_MESSAGE)
        .with_details(json!({ "field": "id", "code": "invalid_id", "cause": error.to_string() }))
        .into()
}

fn query_error(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(role_filter_message())
        .with_details(json!({ "field": "role", "code": "invalid_role", "cause": error.to_string() }))
        .into()
}

fn json_error(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match error {
        JsonPayloadError::Deserialize(cause) => Error::invalid_request(cause.to_string())
            .with_details(json!({ "code": "invalid_body" }))
            .into(),
        // Oversized or mistyped payloads keep their own status.
        other => other.into(),
    }
}

/// Path extractor configuration.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

/// Query extractor configuration.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// JSON body extractor configuration.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Validate a raw path id.
pub fn parse_user_id(raw: u32) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|error| {
        Error::invalid_request(error.to_string())
            .with_details(json!({ "field": "id", "code": "non_positive_id" }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use crate::domain::ErrorCode;
    use crate::inbound::http::Failure;

    #[test]
    fn role_filter_message_lists_every_role() {
        assert_eq!(
            role_filter_message(),
            "role must be one of the following values: INTERN, ENGINEER, ADMIN"
        );
    }

    #[test]
    fn zero_ids_are_invalid_requests() {
        let error = parse_user_id(0).expect_err("zero is rejected");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "id must be a positive integer");
    }

    #[test]
    fn positive_ids_parse() {
        assert_eq!(parse_user_id(3).map(UserId::get), Ok(3));
    }

    #[test]
    fn oversized_bodies_keep_their_own_status() {
        let request = TestRequest::default().to_http_request();
        let error = json_error(JsonPayloadError::Overflow { limit: 8 }, &request);
        match Failure::from_actix(&error) {
            Failure::Http { status, payload } => {
                assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
                assert_eq!(payload.get("statusCode"), Some(&json!(413)));
            }
            other => panic!("expected an HTTP-style failure, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_bodies_are_invalid_requests() {
        let cause = serde_json::from_str::<u32>("\"x\"").expect_err("not a number");
        let request = TestRequest::default().to_http_request();
        let error = json_error(JsonPayloadError::Deserialize(cause), &request);
        let domain = error.as_error::<Error>().expect("domain error");
        assert_eq!(domain.code(), ErrorCode::InvalidRequest);
    }
}
