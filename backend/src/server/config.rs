//! Process settings and the HTTP server configuration built from them.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::memory::InMemorySubmissionStore;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings layered from CLI flags, `INTAKE_*` environment variables and an
/// optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INTAKE")]
pub struct AppSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Expose Prometheus metrics on `/metrics` when built with the `metrics` feature.
    #[ortho_config(default = false)]
    pub metrics: bool,
}

impl AppSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not an IP address literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().trim().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<InMemorySubmissionStore>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration serving records from `store`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<InMemorySubmissionStore>) -> Self {
        Self {
            bind_addr,
            store,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("intake")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("INTAKE_HOST", None::<String>),
            ("INTAKE_PORT", None::<String>),
            ("INTAKE_METRICS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert!(!settings.metrics);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("INTAKE_HOST", Some("127.0.0.1".to_owned())),
            ("INTAKE_PORT", Some("9090".to_owned())),
            ("INTAKE_METRICS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.metrics);
        assert_eq!(
            settings.bind_addr().expect("override address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    #[case("localhost")]
    #[case("not an address")]
    fn non_ip_hosts_are_rejected(#[case] host: &str) {
        let settings = AppSettings {
            host: Some(host.to_owned()),
            port: None,
            metrics: false,
        };
        assert!(settings.bind_addr().is_err());
    }

    #[test]
    fn server_config_keeps_bind_address() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let config = ServerConfig::new(addr, Arc::new(InMemorySubmissionStore::default()));
        assert_eq!(config.bind_addr(), addr);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn with_metrics_stores_middleware_for_the_server() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let store = Arc::new(InMemorySubmissionStore::default());
        let middleware = crate::server::prometheus_middleware().expect("metrics middleware");

        let config = ServerConfig::new(addr, store).with_metrics(Some(middleware));
        assert!(config.prometheus.is_some());
    }
}
