//! Tests for error construction and wire format.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Builds a validation error inside a trace scope so it captures `TRACE_ID`.
async fn invalid_request_case() -> Error {
    let trace_id: TraceId = TRACE_ID.parse().expect("trace id");
    TraceId::scope(trace_id, async {
        Error::invalid_request("Invalid enrollment data")
            .with_details(json!([{ "field": "email", "code": "missing_field" }]))
    })
    .await
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("trace id");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[tokio::test]
async fn serialises_message_under_error_key() {
    let invalid_request_case = invalid_request_case().await;
    let value = serde_json::to_value(&invalid_request_case).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "error": "Invalid enrollment data",
            "traceId": TRACE_ID,
            "details": [{ "field": "email", "code": "missing_field" }],
        })
    );
}

#[rstest]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::internal("Failed to fetch enrollments"))
        .expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "internal_error", "error": "Failed to fetch enrollments" })
    );
}

#[rstest]
#[tokio::test]
async fn round_trips_through_json() {
    let invalid_request_case = invalid_request_case().await;
    let text = serde_json::to_string(&invalid_request_case).expect("serialise error");
    let decoded: Error = serde_json::from_str(&text).expect("deserialise error");
    assert_eq!(decoded, invalid_request_case);
}

#[rstest]
#[tokio::test]
async fn without_details_strips_details() {
    let invalid_request_case = invalid_request_case().await;
    assert!(invalid_request_case.without_details().details().is_none());
}
