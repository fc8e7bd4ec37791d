//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`SubmissionMetrics`]) describe what the
//! intake services need from storage and telemetry adapters. Driving ports
//! (`*Command`, `*Query`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod consultation_repository;
mod enrollment_repository;
mod intake;
mod submission_metrics;

pub use consultation_repository::{ConsultationRepository, ConsultationRepositoryError};
#[cfg(test)]
pub use consultation_repository::MockConsultationRepository;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use intake::{ConsultationCommand, ConsultationQuery, EnrollmentCommand, EnrollmentQuery};
pub use submission_metrics::{
    NoOpSubmissionMetrics, SubmissionMetrics, SubmissionMetricsError, SubmissionOutcome,
};
#[cfg(test)]
pub use submission_metrics::MockSubmissionMetrics;
