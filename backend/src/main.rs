//! Intake server entry-point: loads settings, builds the submission store, and
//! serves the REST API.

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use intake::inbound::http::health::HealthState;
use intake::outbound::memory::InMemorySubmissionStore;
use intake::server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid host {:?}: {e}", settings.host())))?;

    let store = Arc::new(InMemorySubmissionStore::default());
    let config = ServerConfig::new(bind_addr, store);
    #[cfg(feature = "metrics")]
    let config = {
        let prometheus = if settings.metrics {
            Some(intake::server::prometheus_middleware()?)
        } else {
            None
        };
        config.with_metrics(prometheus)
    };
    #[cfg(not(feature = "metrics"))]
    {
        if settings.metrics {
            warn!("metrics requested but the binary was built without the `metrics` feature");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
