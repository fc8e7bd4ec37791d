//! Consultation booking handlers.
//!
//! ```text
//! POST /api/consultations {"fullName":"Ada","email":"ada@x.com"}
//! GET /api/consultations
//! ```

use actix_web::{get, post, web};
use serde::Serialize;

use crate::domain::Consultation;
use crate::domain::intake_service::INVALID_CONSULTATION;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::decode_json_body;
use crate::inbound::http::schemas::{
    ConsultationCreatedSchema, ConsultationRequestSchema, ConsultationSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Success envelope for `POST /api/consultations`.
#[derive(Debug, Serialize)]
pub struct ConsultationBooked {
    success: bool,
    consultation: Consultation,
}

impl From<Consultation> for ConsultationBooked {
    fn from(consultation: Consultation) -> Self {
        Self {
            success: true,
            consultation,
        }
    }
}

/// Book a free consultation.
///
/// Only `fullName` and `email` are required; omitted optional fields are
/// stored and returned as `null`.
#[utoipa::path(
    post,
    path = "/api/consultations",
    request_body = ConsultationRequestSchema,
    responses(
        (status = 200, description = "Consultation booked", body = ConsultationCreatedSchema),
        (status = 400, description = "Invalid consultation data", body = ErrorSchema),
        (status = 500, description = "Failed to book consultation", body = ErrorSchema)
    ),
    tags = ["consultations"],
    operation_id = "bookConsultation"
)]
#[post("/consultations")]
pub async fn create_consultation(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<ConsultationBooked>> {
    let payload = decode_json_body(&body, INVALID_CONSULTATION)?;
    let consultation = state.consultations.book(&payload).await?;
    Ok(web::Json(consultation.into()))
}

#[utoipa::path(
    get,
    path = "/api/consultations",
    responses(
        (status = 200, description = "Stored consultations", body = [ConsultationSchema]),
        (status = 500, description = "Failed to fetch consultations", body = ErrorSchema)
    ),
    tags = ["consultations"],
    operation_id = "listConsultations"
)]
#[get("/consultations")]
pub async fn list_consultations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Consultation>>> {
    let records = state.consultations_query.list().await?;
    Ok(web::Json(records))
}
