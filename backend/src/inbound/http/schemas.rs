//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their domain types but
//! live in the inbound adapter layer where framework concerns belong.
#![expect(
    dead_code,
    reason = "Fields are read only by utoipa during schema generation"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The submitted payload failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for a single validation issue in `details`.
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldIssue)]
pub struct FieldIssueSchema {
    /// Payload field the issue refers to.
    #[schema(example = "email")]
    field: String,
    /// One of `missing_field`, `invalid_type`, `empty_field`, `invalid_payload`.
    #[schema(example = "missing_field")]
    code: String,
    #[schema(example = "email is required")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures list every failing field in `details`; internal
/// failures never carry details.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid enrollment data")]
    error: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<Vec<FieldIssueSchema>>,
}

/// Request body for `POST /api/enrollments`. Every field is required.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct EnrollmentRequestSchema {
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = "+233 20 000 0000")]
    phone: String,
    #[schema(example = "Ghana")]
    country: String,
    #[schema(example = "Complete Beginner")]
    experience: String,
    #[schema(example = "full")]
    payment_plan: String,
}

/// OpenAPI schema for [`crate::domain::Enrollment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Enrollment, rename_all = "camelCase")]
pub struct EnrollmentSchema {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    full_name: String,
    email: String,
    phone: String,
    country: String,
    experience: String,
    payment_plan: String,
    /// RFC 3339 timestamp assigned by the store.
    #[schema(example = "2026-10-19T09:30:00Z")]
    created_at: String,
}

/// Success envelope for `POST /api/enrollments`.
#[derive(ToSchema)]
pub struct EnrollmentCreatedSchema {
    /// Always `true`.
    success: bool,
    enrollment: EnrollmentSchema,
}

/// Request body for `POST /api/consultations`.
///
/// `phone`, `message`, and `preferredTime` may be omitted or sent as `""`.
/// An explicit `null` is rejected.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ConsultationRequestSchema {
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    phone: Option<String>,
    message: Option<String>,
    #[schema(example = "weekday evenings")]
    preferred_time: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Consultation`].
///
/// Optional fields are always present and `null` when not supplied.
#[derive(ToSchema)]
#[schema(as = crate::domain::Consultation, rename_all = "camelCase")]
pub struct ConsultationSchema {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    full_name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    preferred_time: Option<String>,
    #[schema(example = "2026-10-19T09:30:00Z")]
    created_at: String,
}

/// Success envelope for `POST /api/consultations`.
#[derive(ToSchema)]
pub struct ConsultationCreatedSchema {
    /// Always `true`.
    success: bool,
    consultation: ConsultationSchema,
}
