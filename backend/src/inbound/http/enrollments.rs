//! Enrollment API handlers.
//!
//! ```text
//! POST /api/enrollments {"fullName":"Ada","email":"ada@x.com",...}
//! GET /api/enrollments
//! ```

use actix_web::{get, post, web};
use serde::Serialize;

use crate::domain::Enrollment;
use crate::domain::intake_service::INVALID_ENROLLMENT;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::decode_json_body;
use crate::inbound::http::schemas::{
    EnrollmentCreatedSchema, EnrollmentRequestSchema, EnrollmentSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Success envelope for `POST /api/enrollments`.
#[derive(Debug, Serialize)]
pub struct EnrollmentCreated {
    success: bool,
    enrollment: Enrollment,
}

impl From<Enrollment> for EnrollmentCreated {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            success: true,
            enrollment,
        }
    }
}

/// Validate and store a bootcamp enrollment.
///
/// Every failing field is reported in `details`; nothing is stored unless the
/// whole payload is valid.
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollmentRequestSchema,
    responses(
        (status = 200, description = "Enrollment stored", body = EnrollmentCreatedSchema),
        (status = 400, description = "Invalid enrollment data", body = ErrorSchema),
        (status = 500, description = "Failed to create enrollment", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "createEnrollment"
)]
#[post("/enrollments")]
pub async fn create_enrollment(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<EnrollmentCreated>> {
    let payload = decode_json_body(&body, INVALID_ENROLLMENT)?;
    let enrollment = state.enrollments.submit(&payload).await?;
    Ok(web::Json(enrollment.into()))
}

/// List every stored enrollment in submission order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use intake::inbound::http::enrollments::list_enrollments;
///
/// let app = App::new().service(list_enrollments);
/// ```
#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses(
        (status = 200, description = "Stored enrollments", body = [EnrollmentSchema]),
        (status = 500, description = "Failed to fetch enrollments", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "listEnrollments"
)]
#[get("/enrollments")]
pub async fn list_enrollments(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Enrollment>>> {
    let records = state.enrollments_query.list().await?;
    Ok(web::Json(records))
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
