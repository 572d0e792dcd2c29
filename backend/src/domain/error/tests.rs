//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::validation_failed("rejected"), ErrorCode::ValidationFailed)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn blank_messages_fall_back_to_code_description() {
    let error = Error::not_found("   ");
    assert_eq!(error.message(), "not found");
}

#[rstest]
fn details_are_attached() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "id" }));
    assert_eq!(error.details(), Some(&json!({ "field": "id" })));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID literal");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_with_camel_case_fields() {
    let value = serde_json::to_value(Error::not_found("missing")).expect("serialises");
    assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
}
