//! Analytics bridge facade and bootstrap helpers.
//!
//! This crate wires a host-provided analytics backend (the vendor monitoring
//! agent, or the `backend-noop` stand-in where none is linked) into the
//! [`AnalyticsBridge`] facade exposed to host applications. Mobile hosts
//! inject their platform agent adapter; desktop and CI builds typically
//! enable the `noop-backend` feature and let [`BridgeConfig`] fall back to
//! the no-op adapter.
//!
//! The facade is deliberately thin: three forwarding operations, a uniform
//! [`StartupOutcome`] in place of raw agent codes, and structured logging of
//! each result. Session state lives entirely in the backend.

pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;

pub use bridge::{AnalyticsBridge, StartupOutcome};
pub use config::{BridgeConfig, BridgeConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};

/// Convenience bootstrapper for hosts that let the bridge own process logging.
///
/// Installs the logging stack (mirroring events into the configured host
/// sink, if any) and returns the facade. Hosts that already initialized
/// logging should use [`AnalyticsBridge::from_config`] directly.
///
/// ```ignore
/// use core_bridge::{bootstrap, BridgeConfig};
///
/// let config = BridgeConfig::builder().build()?;
/// let bridge = bootstrap(config)?;
/// bridge.startup("app-id", "https://beacon.example.com")?;
/// ```
pub fn bootstrap(config: BridgeConfig) -> Result<AnalyticsBridge> {
    let mut logging_config = LoggingConfig::default();
    if let Some(sink) = config.host_logger.clone() {
        logging_config = logging_config.with_host_logger(sink);
    }
    init_logging(logging_config)?;
    Ok(AnalyticsBridge::from_config(config))
}
