//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ConsultationCommand, ConsultationQuery, EnrollmentCommand, EnrollmentQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
    pub consultations: Arc<dyn ConsultationCommand>,
    pub consultations_query: Arc<dyn ConsultationQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use intake::domain::ports::NoOpSubmissionMetrics;
    /// use intake::domain::{ConsultationService, EnrollmentService};
    /// use intake::inbound::http::state::HttpState;
    /// use intake::outbound::memory::InMemorySubmissionStore;
    ///
    /// let store = Arc::new(InMemorySubmissionStore::default());
    /// let enrollments = Arc::new(EnrollmentService::new(
    ///     store.clone(),
    ///     Arc::new(NoOpSubmissionMetrics),
    /// ));
    /// let consultations = Arc::new(ConsultationService::new(
    ///     store,
    ///     Arc::new(NoOpSubmissionMetrics),
    /// ));
    /// let _state = HttpState::new(
    ///     enrollments.clone(),
    ///     enrollments,
    ///     consultations.clone(),
    ///     consultations,
    /// );
    /// ```
    pub fn new(
        enrollments: Arc<dyn EnrollmentCommand>,
        enrollments_query: Arc<dyn EnrollmentQuery>,
        consultations: Arc<dyn ConsultationCommand>,
        consultations_query: Arc<dyn ConsultationQuery>,
    ) -> Self {
        Self {
            enrollments,
            enrollments_query,
            consultations,
            consultations_query,
        }
    }
}
