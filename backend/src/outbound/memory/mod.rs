//! In-memory submission store.
//!
//! Holds enrollment and consultation records for the lifetime of the process.
//! Nothing is persisted: a restart loses every record. Both tables sit behind
//! a single mutex so creates and lists are atomic with respect to each other
//! on Actix's multi-threaded workers. The lock is never held across an
//! `.await`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    ConsultationRepository, ConsultationRepositoryError, EnrollmentRepository,
    EnrollmentRepositoryError,
};
use crate::domain::{Consultation, Enrollment, NewConsultation, NewEnrollment, RecordId};

const POISONED: &str = "submission store lock poisoned";

/// Records of one kind keyed by identifier, remembering insertion order.
struct Table<T> {
    rows: HashMap<RecordId, T>,
    order: Vec<RecordId>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, id: RecordId, row: T) {
        if self.rows.insert(id, row).is_none() {
            self.order.push(id);
        }
    }

    fn snapshot(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct StoreState {
    enrollments: Table<Enrollment>,
    consultations: Table<Consultation>,
}

/// Process-lifetime store implementing both submission repositories.
///
/// Construct one at startup and share it behind an `Arc`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use intake::outbound::memory::InMemorySubmissionStore;
///
/// let store = Arc::new(InMemorySubmissionStore::default());
/// let _handle = Arc::clone(&store);
/// ```
pub struct InMemorySubmissionStore {
    clock: Arc<dyn Clock>,
    state: Mutex<StoreState>,
}

impl Default for InMemorySubmissionStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemorySubmissionStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: Mutex::new(StoreState::default()),
        }
    }

    fn lock<E>(
        &self,
        poisoned: impl FnOnce(&'static str) -> E,
    ) -> Result<MutexGuard<'_, StoreState>, E> {
        self.state.lock().map_err(|_| poisoned(POISONED))
    }
}

#[async_trait]
impl EnrollmentRepository for InMemorySubmissionStore {
    async fn create(&self, draft: NewEnrollment) -> Result<Enrollment, EnrollmentRepositoryError> {
        let record = Enrollment::new(RecordId::random(), draft, self.clock.utc());
        let mut state = self.lock(EnrollmentRepositoryError::unavailable)?;
        state.enrollments.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        let state = self.lock(EnrollmentRepositoryError::unavailable)?;
        Ok(state.enrollments.snapshot())
    }
}

#[async_trait]
impl ConsultationRepository for InMemorySubmissionStore {
    async fn create(
        &self,
        draft: NewConsultation,
    ) -> Result<Consultation, ConsultationRepositoryError> {
        let record = Consultation::new(RecordId::random(), draft, self.clock.utc());
        let mut state = self.lock(ConsultationRepositoryError::unavailable)?;
        state.consultations.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Consultation>, ConsultationRepositoryError> {
        let state = self.lock(ConsultationRepositoryError::unavailable)?;
        Ok(state.consultations.snapshot())
    }
}
