//! Builders wiring the submission store and metrics into HTTP handler state.

use std::sync::Arc;

use crate::domain::ports::{NoOpSubmissionMetrics, SubmissionMetrics};
use crate::domain::{ConsultationService, EnrollmentService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemorySubmissionStore;
#[cfg(feature = "metrics")]
use crate::outbound::metrics::PrometheusSubmissionMetrics;

use super::ServerConfig;

/// Pick the submission metrics recorder for this configuration.
///
/// Prometheus counters are registered on the middleware's registry so they
/// share its `/metrics` endpoint.
#[cfg(feature = "metrics")]
fn build_submission_metrics(config: &ServerConfig) -> std::io::Result<Arc<dyn SubmissionMetrics>> {
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusSubmissionMetrics::new(&prom.registry).map_err(|e| {
                std::io::Error::other(format!("submission metrics registration failed: {e}"))
            })?;
            Ok(Arc::new(metrics))
        }
        None => Ok(Arc::new(NoOpSubmissionMetrics)),
    }
}

#[cfg(not(feature = "metrics"))]
fn build_submission_metrics(
    _config: &ServerConfig,
) -> std::io::Result<Arc<dyn SubmissionMetrics>> {
    Ok(Arc::new(NoOpSubmissionMetrics))
}

/// Build handler state over `store`, sharing one metrics recorder between
/// both intake services.
pub fn state_for_store(
    store: Arc<InMemorySubmissionStore>,
    metrics: Arc<dyn SubmissionMetrics>,
) -> HttpState {
    let enrollments = Arc::new(EnrollmentService::new(store.clone(), metrics.clone()));
    let consultations = Arc::new(ConsultationService::new(store, metrics));
    HttpState::new(
        enrollments.clone(),
        enrollments,
        consultations.clone(),
        consultations,
    )
}

/// Build HTTP state for the configured store and metrics.
///
/// # Errors
/// Returns [`std::io::Error`] if Prometheus metric registration fails.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let metrics = build_submission_metrics(config)?;
    Ok(state_for_store(config.store.clone(), metrics))
}
