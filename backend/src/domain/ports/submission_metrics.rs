//! Domain port surface for recording submission outcomes.
//!
//! Implementations may export to Prometheus or discard the observations.
//! Recording failures never fail the submission itself.

use async_trait::async_trait;

use crate::domain::RecordKind;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording submission metrics.
    pub enum SubmissionMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "submission metrics exporter failed: {message}",
    }
}

/// Result of a single intake attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The record was stored.
    Created,
    /// The payload failed validation.
    Rejected,
    /// Storage failed.
    Failed,
}

impl SubmissionOutcome {
    /// Metric label value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// Metrics recording port for intake attempts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionMetrics: Send + Sync {
    /// Record one intake attempt for `kind`.
    async fn record(
        &self,
        kind: RecordKind,
        outcome: SubmissionOutcome,
    ) -> Result<(), SubmissionMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSubmissionMetrics;

#[async_trait]
impl SubmissionMetrics for NoOpSubmissionMetrics {
    async fn record(
        &self,
        _kind: RecordKind,
        _outcome: SubmissionOutcome,
    ) -> Result<(), SubmissionMetricsError> {
        Ok(())
    }
}
