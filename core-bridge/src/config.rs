//! # Bridge Configuration Module
//!
//! Dependency injection for the analytics bridge.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`BridgeConfig`] holding the backend capability and host-level settings.
//! It enforces fail-fast validation so a missing backend is caught at wiring
//! time with an actionable message instead of silently dropping telemetry.
//!
//! ## Required Dependencies
//!
//! - `AnalyticsBackend` - the monitoring agent adapter (with the
//!   `noop-backend` feature a missing backend falls back to `NoopBackend`)
//!
//! ## Optional Dependencies
//!
//! - `HostLogger` - mirror bridge diagnostics into the host logging pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use core_bridge::config::BridgeConfig;
//! use std::sync::Arc;
//!
//! let config = BridgeConfig::builder()
//!     .backend(Arc::new(MyAgentAdapter::new(app_context)))
//!     .certificate_path("/etc/ssl/beacon.pem")
//!     .build()
//!     .expect("Failed to build config");
//! ```

use std::fmt;
use std::sync::Arc;

use backend_traits::analytics::AnalyticsBackend;
use backend_traits::logging::HostLogger;

use crate::error::Result;

/// Validated configuration for constructing an
/// [`AnalyticsBridge`](crate::bridge::AnalyticsBridge).
#[derive(Clone)]
pub struct BridgeConfig {
    /// The monitoring agent adapter (required).
    pub backend: Arc<dyn AnalyticsBackend>,

    /// Host logging sink for bridge diagnostics (optional).
    pub host_logger: Option<Arc<dyn HostLogger>>,

    /// Accept beacon server certificates that fail trust validation.
    pub allow_untrusted_certs: bool,

    /// Custom certificate bundle for beacon TLS.
    pub certificate_path: Option<String>,
}

impl BridgeConfig {
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }
}

impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("backend", &"AnalyticsBackend { ... }")
            .field(
                "host_logger",
                &self.host_logger.as_ref().map(|_| "HostLogger { ... }"),
            )
            .field("allow_untrusted_certs", &self.allow_untrusted_certs)
            .field("certificate_path", &self.certificate_path)
            .finish()
    }
}

/// Builder for [`BridgeConfig`].
#[derive(Default)]
pub struct BridgeConfigBuilder {
    backend: Option<Arc<dyn AnalyticsBackend>>,
    host_logger: Option<Arc<dyn HostLogger>>,
    allow_untrusted_certs: bool,
    certificate_path: Option<String>,
}

impl BridgeConfigBuilder {
    /// Set the monitoring agent adapter.
    pub fn backend(mut self, backend: Arc<dyn AnalyticsBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the host logging sink.
    pub fn host_logger(mut self, logger: Arc<dyn HostLogger>) -> Self {
        self.host_logger = Some(logger);
        self
    }

    /// Accept beacon server certificates that fail trust validation.
    pub fn allow_untrusted_certs(mut self, allow: bool) -> Self {
        self.allow_untrusted_certs = allow;
        self
    }

    /// Set a custom certificate bundle for beacon TLS.
    pub fn certificate_path(mut self, path: impl Into<String>) -> Self {
        self.certificate_path = Some(path.into());
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`](crate::error::Error::CapabilityMissing)
    /// if no backend was provided and no default is available.
    pub fn build(self) -> Result<BridgeConfig> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => default_backend()?,
        };

        Ok(BridgeConfig {
            backend,
            host_logger: self.host_logger,
            allow_untrusted_certs: self.allow_untrusted_certs,
            certificate_path: self.certificate_path,
        })
    }
}

#[cfg(feature = "noop-backend")]
fn default_backend() -> Result<Arc<dyn AnalyticsBackend>> {
    Ok(Arc::new(backend_noop::NoopBackend::new()))
}

#[cfg(not(feature = "noop-backend"))]
fn default_backend() -> Result<Arc<dyn AnalyticsBackend>> {
    Err(crate::error::Error::CapabilityMissing {
        capability: "AnalyticsBackend".to_string(),
        message: "No analytics backend provided. \
                  Desktop/dev: enable the `noop-backend` feature. \
                  Mobile: inject the platform agent adapter."
            .to_string(),
    })
}
