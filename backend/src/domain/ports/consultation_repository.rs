//! Driven port for consultation storage.

use async_trait::async_trait;

use crate::domain::{Consultation, NewConsultation};

use super::define_port_error;

define_port_error! {
    /// Errors raised by consultation storage adapters.
    pub enum ConsultationRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "consultation store unavailable: {message}",
    }
}

/// Storage for consultation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Store a new record built from `draft`, normalising absent optional
    /// fields to `None`.
    async fn create(
        &self,
        draft: NewConsultation,
    ) -> Result<Consultation, ConsultationRepositoryError>;

    /// Return every stored record.
    async fn list(&self) -> Result<Vec<Consultation>, ConsultationRepositoryError>;
}
