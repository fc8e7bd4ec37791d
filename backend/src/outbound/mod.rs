//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! - **memory**: process-lifetime submission store
//! - **metrics**: Prometheus-backed metrics exporters (feature-gated)
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
#[cfg(feature = "metrics")]
pub mod metrics;
