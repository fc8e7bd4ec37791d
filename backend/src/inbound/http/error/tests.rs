//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

use crate::domain::TraceId;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Runs `build` inside a trace scope so the error captures `TRACE_ID`.
async fn traced(build: impl FnOnce() -> Error) -> Error {
    let trace_id: TraceId = TRACE_ID.parse().expect("trace id");
    TraceId::scope(trace_id, async move { build() }).await
}

async fn internal_error_case() -> Error {
    traced(|| {
        Error::internal("Failed to create enrollment")
            .with_details(json!({"cause": "lock poisoned"}))
    })
    .await
}

async fn invalid_request_case() -> Error {
    traced(|| {
        Error::invalid_request("Invalid enrollment data")
            .with_details(json!([{"field": "email", "code": "missing_field"}]))
    })
    .await
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn response_body(error: &Error, expected_status: StatusCode) -> (Option<String>, Value) {
    let response = ResponseError::error_response(error);
    assert_eq!(response.status(), expected_status);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("JSON error body");
    (header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_drop_details_but_keep_message() {
    let internal_error_case = internal_error_case().await;
    let (header, body) =
        response_body(&internal_error_case, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "error": "Failed to create enrollment",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn validation_errors_carry_details() {
    let invalid_request_case = invalid_request_case().await;
    let (header, body) = response_body(&invalid_request_case, StatusCode::BAD_REQUEST).await;
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["error"], json!("Invalid enrollment data"));
    assert_eq!(body["details"][0]["field"], json!("email"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad");
    let (header, body) = response_body(&error, StatusCode::BAD_REQUEST).await;
    assert!(header.is_none());
    assert!(body.get("traceId").is_none());
}
