//! Driving ports used by the HTTP intake handlers.
//!
//! Commands take the raw JSON payload, validate it, and store the resulting
//! draft. Every failure is already mapped onto [`Error`]: validation failures
//! carry [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode::InvalidRequest)
//! with itemised details, storage failures carry a generic internal error.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Consultation, Enrollment, Error};

/// Use-case port for submitting enrollments.
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Validate `payload` and store the enrollment it describes.
    async fn submit(&self, payload: &Value) -> Result<Enrollment, Error>;
}

/// Use-case port for reading enrollments.
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// Return every stored enrollment.
    async fn list(&self) -> Result<Vec<Enrollment>, Error>;
}

/// Use-case port for booking consultations.
#[async_trait]
pub trait ConsultationCommand: Send + Sync {
    /// Validate `payload` and store the consultation request it describes.
    async fn book(&self, payload: &Value) -> Result<Consultation, Error>;
}

/// Use-case port for reading consultations.
#[async_trait]
pub trait ConsultationQuery: Send + Sync {
    /// Return every stored consultation.
    async fn list(&self) -> Result<Vec<Consultation>, Error>;
}
