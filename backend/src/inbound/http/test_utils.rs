//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{ConsultationRepository, EnrollmentRepository, NoOpSubmissionMetrics};
use crate::domain::{ConsultationService, EnrollmentService};
use crate::outbound::memory::InMemorySubmissionStore;

use super::state::HttpState;

/// Build handler state over the supplied repositories with metrics disabled.
pub fn http_state<E, C>(enrollments: Arc<E>, consultations: Arc<C>) -> HttpState
where
    E: EnrollmentRepository + 'static,
    C: ConsultationRepository + 'static,
{
    let enrollment_service = Arc::new(EnrollmentService::new(
        enrollments,
        Arc::new(NoOpSubmissionMetrics),
    ));
    let consultation_service = Arc::new(ConsultationService::new(
        consultations,
        Arc::new(NoOpSubmissionMetrics),
    ));
    HttpState::new(
        enrollment_service.clone(),
        enrollment_service,
        consultation_service.clone(),
        consultation_service,
    )
}

/// Build handler state backed by `store` for both record kinds.
pub fn memory_state(store: Arc<InMemorySubmissionStore>) -> HttpState {
    crate::server::state_for_store(store, Arc::new(NoOpSubmissionMetrics))
}

/// Minimal app mounting the intake handlers under `/api`.
pub fn intake_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api")
            .service(super::enrollments::create_enrollment)
            .service(super::enrollments::list_enrollments)
            .service(super::consultations::create_consultation)
            .service(super::consultations::list_consultations),
    )
}
