//! End-to-end behaviour of the intake API through the fully assembled app.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use intake::domain::ports::NoOpSubmissionMetrics;
use intake::domain::{TRACE_ID_HEADER, TraceId};
use intake::inbound::http::health::HealthState;
use intake::outbound::memory::InMemorySubmissionStore;
use intake::server::{AppDependencies, build_app, state_for_store};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn ada() -> Value {
    json!({
        "fullName": "Ada",
        "email": "ada@x.com",
        "phone": "123",
        "country": "Ghana",
        "experience": "Complete Beginner",
        "paymentPlan": "full",
    })
}

async fn init_app(
    health_state: web::Data<HealthState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let store = Arc::new(InMemorySubmissionStore::default());
    let http_state = web::Data::new(state_for_store(store, Arc::new(NoOpSubmissionMetrics)));
    test::init_service(build_app(AppDependencies {
        health_state,
        http_state,
    }))
    .await
}

async fn ready_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    init_app(health_state).await
}

fn trace_header(res: &ServiceResponse<BoxBody>) -> String {
    res.headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ascii")
        .to_owned()
}

async fn list(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    uri: &str,
) -> Vec<Value> {
    test::call_and_read_body_json(app, TestRequest::get().uri(uri).to_request()).await
}

#[rstest]
#[actix_web::test]
async fn valid_enrollment_is_stored_and_listed(ada: Value) {
    let app = ready_app().await;

    let req = TestRequest::post()
        .uri("/api/enrollments")
        .set_json(&ada)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(trace_header(&res).parse::<TraceId>().is_ok());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["enrollment"]["fullName"], json!("Ada"));
    let id = body["enrollment"]["id"].clone();
    assert!(id.as_str().is_some_and(|id| !id.is_empty()));

    let listed = list(&app, "/api/enrollments").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["country"], json!("Ghana"));
}

#[rstest]
#[actix_web::test]
async fn rejected_enrollment_leaves_store_unchanged(mut ada: Value) {
    let app = ready_app().await;
    ada.as_object_mut().expect("object").remove("email");

    let req = TestRequest::post()
        .uri("/api/enrollments")
        .set_json(&ada)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let trace_id = trace_header(&res);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], json!(trace_id));
    assert!(
        body["details"]
            .as_array()
            .expect("details array")
            .iter()
            .any(|issue| issue["field"] == "email" && issue["code"] == "missing_field")
    );

    assert!(list(&app, "/api/enrollments").await.is_empty());
}

#[rstest]
#[actix_web::test]
async fn consecutive_submissions_get_distinct_ids(ada: Value) {
    let app = ready_app().await;
    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = TestRequest::post()
            .uri("/api/enrollments")
            .set_json(&ada)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["enrollment"]["id"].clone());
    }
    assert_ne!(ids[0], ids[1]);

    let listed: Vec<Value> = list(&app, "/api/enrollments")
        .await
        .into_iter()
        .map(|record| record["id"].clone())
        .collect();
    assert_eq!(listed, ids);
}

#[rstest]
#[actix_web::test]
async fn consultation_stores_explicit_nulls_and_stays_separate(ada: Value) {
    let app = ready_app().await;
    let req = TestRequest::post()
        .uri("/api/enrollments")
        .set_json(&ada)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::post()
        .uri("/api/consultations")
        .set_json(json!({ "fullName": "Ada", "email": "ada@x.com", "message": "" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));

    let listed = list(&app, "/api/consultations").await;
    assert_eq!(listed.len(), 1);
    for key in ["phone", "message", "preferredTime"] {
        assert_eq!(listed[0].get(key), Some(&Value::Null), "{key}");
    }
    assert_eq!(list(&app, "/api/enrollments").await.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_return_json_not_found() {
    let app = ready_app().await;
    let res = test::call_service(&app, TestRequest::get().uri("/api/users").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("not_found"));
}

#[rstest]
#[case(false, StatusCode::SERVICE_UNAVAILABLE)]
#[case(true, StatusCode::OK)]
#[actix_web::test]
async fn readiness_probe_reflects_health_state(#[case] ready: bool, #[case] expected: StatusCode) {
    let health_state = web::Data::new(HealthState::new());
    if ready {
        health_state.mark_ready();
    }
    let app = init_app(health_state).await;

    let res = test::call_service(&app, TestRequest::get().uri("/health/ready").to_request()).await;
    assert_eq!(res.status(), expected);
    let res = test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}
