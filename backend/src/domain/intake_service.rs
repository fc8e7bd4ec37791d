//! Intake services implementing the enrollment and consultation driving ports.
//!
//! Each service validates the raw payload, hands the draft to its repository,
//! and maps every outcome onto [`Error`] with the client-facing messages the
//! site's forms expect.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ConsultationCommand, ConsultationQuery, ConsultationRepository, EnrollmentCommand,
    EnrollmentQuery, EnrollmentRepository, SubmissionMetrics, SubmissionOutcome,
};
use crate::domain::{
    Consultation, Enrollment, Error, NewConsultation, NewEnrollment, RecordId, RecordKind,
    ValidationErrors,
};

pub(crate) const INVALID_ENROLLMENT: &str = "Invalid enrollment data";
pub(crate) const ENROLLMENT_CREATE_FAILED: &str = "Failed to create enrollment";
pub(crate) const ENROLLMENT_LIST_FAILED: &str = "Failed to fetch enrollments";
pub(crate) const INVALID_CONSULTATION: &str = "Invalid consultation data";
pub(crate) const CONSULTATION_CREATE_FAILED: &str = "Failed to book consultation";
pub(crate) const CONSULTATION_LIST_FAILED: &str = "Failed to fetch consultations";

/// Metric label and client-facing messages for one submission kind.
#[derive(Debug, Clone, Copy)]
struct SubmissionFlow {
    kind: RecordKind,
    invalid: &'static str,
    create_failed: &'static str,
}

const ENROLLMENT_FLOW: SubmissionFlow = SubmissionFlow {
    kind: RecordKind::Enrollment,
    invalid: INVALID_ENROLLMENT,
    create_failed: ENROLLMENT_CREATE_FAILED,
};

const CONSULTATION_FLOW: SubmissionFlow = SubmissionFlow {
    kind: RecordKind::Consultation,
    invalid: INVALID_CONSULTATION,
    create_failed: CONSULTATION_CREATE_FAILED,
};

/// Stored records expose their identifier for the "stored" log line.
trait StoredSubmission {
    fn record_id(&self) -> RecordId;
}

impl StoredSubmission for Enrollment {
    fn record_id(&self) -> RecordId {
        self.id()
    }
}

impl StoredSubmission for Consultation {
    fn record_id(&self) -> RecordId {
        self.id()
    }
}

async fn record_outcome(
    metrics: &dyn SubmissionMetrics,
    kind: RecordKind,
    outcome: SubmissionOutcome,
) {
    if let Err(err) = metrics.record(kind, outcome).await {
        warn!(
            error = %err,
            %kind,
            outcome = outcome.as_str(),
            "failed to record submission metric"
        );
    }
}

/// Store a parsed draft, logging and counting every outcome.
///
/// `create` only runs when `draft` is valid. Storage errors are logged with
/// their cause and surface as the flow's generic internal message.
async fn store_submission<D, T, E, F, Fut>(
    flow: SubmissionFlow,
    metrics: &dyn SubmissionMetrics,
    draft: Result<D, ValidationErrors>,
    create: F,
) -> Result<T, Error>
where
    T: StoredSubmission,
    E: Display,
    F: FnOnce(D) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let kind = flow.kind;
    let draft = match draft {
        Ok(draft) => draft,
        Err(issues) => {
            info!(%kind, %issues, "submission rejected");
            record_outcome(metrics, kind, SubmissionOutcome::Rejected).await;
            return Err(issues.into_error(flow.invalid));
        }
    };

    match create(draft).await {
        Ok(record) => {
            info!(%kind, id = %record.record_id(), "submission stored");
            record_outcome(metrics, kind, SubmissionOutcome::Created).await;
            Ok(record)
        }
        Err(err) => {
            error!(error = %err, %kind, "failed to store submission");
            record_outcome(metrics, kind, SubmissionOutcome::Failed).await;
            Err(Error::internal(flow.create_failed))
        }
    }
}

/// Enrollment intake backed by an [`EnrollmentRepository`].
#[derive(Clone)]
pub struct EnrollmentService<R> {
    repo: Arc<R>,
    metrics: Arc<dyn SubmissionMetrics>,
}

impl<R> EnrollmentService<R> {
    /// Create a service over `repo`, reporting outcomes to `metrics`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use intake::domain::EnrollmentService;
    /// use intake::domain::ports::NoOpSubmissionMetrics;
    /// use intake::outbound::memory::InMemorySubmissionStore;
    ///
    /// let store = Arc::new(InMemorySubmissionStore::default());
    /// let _service = EnrollmentService::new(store, Arc::new(NoOpSubmissionMetrics));
    /// ```
    pub fn new(repo: Arc<R>, metrics: Arc<dyn SubmissionMetrics>) -> Self {
        Self { repo, metrics }
    }
}

#[async_trait]
impl<R> EnrollmentCommand for EnrollmentService<R>
where
    R: EnrollmentRepository,
{
    async fn submit(&self, payload: &Value) -> Result<Enrollment, Error> {
        store_submission(
            ENROLLMENT_FLOW,
            self.metrics.as_ref(),
            NewEnrollment::from_payload(payload),
            |draft| self.repo.create(draft),
        )
        .await
    }
}

#[async_trait]
impl<R> EnrollmentQuery for EnrollmentService<R>
where
    R: EnrollmentRepository,
{
    async fn list(&self) -> Result<Vec<Enrollment>, Error> {
        self.repo.list().await.map_err(|err| {
            error!(error = %err, kind = %RecordKind::Enrollment, "failed to list submissions");
            Error::internal(ENROLLMENT_LIST_FAILED)
        })
    }
}

/// Consultation intake backed by a [`ConsultationRepository`].
#[derive(Clone)]
pub struct ConsultationService<R> {
    repo: Arc<R>,
    metrics: Arc<dyn SubmissionMetrics>,
}

impl<R> ConsultationService<R> {
    /// Create a service over `repo`, reporting outcomes to `metrics`.
    pub fn new(repo: Arc<R>, metrics: Arc<dyn SubmissionMetrics>) -> Self {
        Self { repo, metrics }
    }
}

#[async_trait]
impl<R> ConsultationCommand for ConsultationService<R>
where
    R: ConsultationRepository,
{
    async fn book(&self, payload: &Value) -> Result<Consultation, Error> {
        store_submission(
            CONSULTATION_FLOW,
            self.metrics.as_ref(),
            NewConsultation::from_payload(payload),
            |draft| self.repo.create(draft),
        )
        .await
    }
}

#[async_trait]
impl<R> ConsultationQuery for ConsultationService<R>
where
    R: ConsultationRepository,
{
    async fn list(&self) -> Result<Vec<Consultation>, Error> {
        self.repo.list().await.map_err(|err| {
            error!(error = %err, kind = %RecordKind::Consultation, "failed to list submissions");
            Error::internal(CONSULTATION_LIST_FAILED)
        })
    }
}
