//! Driven port for enrollment storage.

use async_trait::async_trait;

use crate::domain::{Enrollment, NewEnrollment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment storage adapters.
    pub enum EnrollmentRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "enrollment store unavailable: {message}",
    }
}

/// Storage for enrollment records.
///
/// `create` assigns the identifier and creation timestamp; callers hand over a
/// validated draft and receive the stored record. Duplicates are never
/// rejected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Store a new record built from `draft`.
    async fn create(&self, draft: NewEnrollment) -> Result<Enrollment, EnrollmentRepositoryError>;

    /// Return every stored record.
    async fn list(&self) -> Result<Vec<Enrollment>, EnrollmentRepositoryError>;
}
