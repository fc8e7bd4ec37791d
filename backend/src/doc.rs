//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the intake and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], keeping domain
//! types free of utoipa derives. The document backs Swagger UI (debug builds)
//! and `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ConsultationCreatedSchema, ConsultationRequestSchema, ConsultationSchema,
    EnrollmentCreatedSchema, EnrollmentRequestSchema, EnrollmentSchema, ErrorCodeSchema,
    ErrorSchema, FieldIssueSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bootcamp intake API",
        description = "Enrollment and consultation form submissions, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::enrollments::create_enrollment,
        crate::inbound::http::enrollments::list_enrollments,
        crate::inbound::http::consultations::create_consultation,
        crate::inbound::http::consultations::list_consultations,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EnrollmentSchema,
        EnrollmentRequestSchema,
        EnrollmentCreatedSchema,
        ConsultationSchema,
        ConsultationRequestSchema,
        ConsultationCreatedSchema,
        ErrorSchema,
        ErrorCodeSchema,
        FieldIssueSchema
    )),
    tags(
        (name = "enrollments", description = "Bootcamp enrollment submissions"),
        (name = "consultations", description = "Free consultation bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
