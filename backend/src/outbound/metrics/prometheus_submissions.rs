//! Prometheus adapter for submission outcome metrics.
//!
//! Metrics are registered with the registry owned by the Actix Prometheus
//! middleware so they appear on the same `/metrics` endpoint.

use async_trait::async_trait;
use prometheus::{IntCounterVec, Opts, Registry};

use crate::domain::RecordKind;
use crate::domain::ports::{SubmissionMetrics, SubmissionMetricsError, SubmissionOutcome};

/// Prometheus-backed submission metrics recorder.
///
/// # Metric Specification
///
/// - **Name**: `intake_submissions_total`
/// - **Type**: Counter
/// - **Labels**:
///   - `kind`: `enrollment` or `consultation`
///   - `outcome`: `created`, `rejected`, or `failed`
pub struct PrometheusSubmissionMetrics {
    submissions_total: IntCounterVec,
}

impl PrometheusSubmissionMetrics {
    /// Create and register metrics with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric with the same name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let submissions_total = IntCounterVec::new(
            Opts::new(
                "intake_submissions_total",
                "Total form submissions by kind and outcome",
            ),
            &["kind", "outcome"],
        )?;
        registry.register(Box::new(submissions_total.clone()))?;
        Ok(Self { submissions_total })
    }
}

#[async_trait]
impl SubmissionMetrics for PrometheusSubmissionMetrics {
    async fn record(
        &self,
        kind: RecordKind,
        outcome: SubmissionOutcome,
    ) -> Result<(), SubmissionMetricsError> {
        self.submissions_total
            .get_metric_with_label_values(&[kind.as_str(), outcome.as_str()])
            .map_err(|err| SubmissionMetricsError::export(err.to_string()))?
            .inc();
        Ok(())
    }
}
