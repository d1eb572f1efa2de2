//! Analytics Backend Abstraction
//!
//! The capability a host platform must provide for the bridge to report
//! sessions and actions to its monitoring agent.

use serde::{Deserialize, Serialize};

use crate::{error::Result, status::StatusCode};

/// Parameters for a single agent startup call.
///
/// `app_id` and `server_url` come from the caller; the TLS fields carry
/// host-level overrides and default to the agent's strict settings.
/// Validation (non-empty id and URL) is the agent's responsibility and is
/// reported through [`StatusCode::InvalidParameter`], not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupRequest {
    /// Application id issued by the monitoring server.
    pub app_id: String,
    /// Beacon endpoint the agent reports to.
    pub server_url: String,
    /// Accept server certificates that fail trust validation.
    pub allow_untrusted_certs: bool,
    /// Path to a custom certificate bundle for beacon TLS.
    pub certificate_path: Option<String>,
}

impl StartupRequest {
    pub fn new(app_id: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            server_url: server_url.into(),
            allow_untrusted_certs: false,
            certificate_path: None,
        }
    }

    pub fn with_untrusted_certs(mut self, allow: bool) -> Self {
        self.allow_untrusted_certs = allow;
        self
    }

    pub fn with_certificate_path(mut self, path: impl Into<String>) -> Self {
        self.certificate_path = Some(path.into());
        self
    }
}

/// Analytics backend trait
///
/// The opaque monitoring agent the bridge forwards to. The agent owns all
/// session state between `startup` and `shutdown`; implementations hold
/// whatever platform context they need (application handle, JNI env) from
/// construction time.
///
/// Recoverable conditions are reported as [`StatusCode`] values in the `Ok`
/// channel. An `Err` is a fault (agent missing, platform call failed) and
/// propagates to the host unchanged.
///
/// # Platform Support
///
/// - **Android**: vendor mobile agent via JNI
/// - **iOS**: vendor mobile agent via FFI
/// - **Desktop / CI**: `backend-noop` (monitoring disabled)
///
/// # Example
///
/// ```ignore
/// use backend_traits::analytics::{AnalyticsBackend, StartupRequest};
///
/// fn boot(backend: &dyn AnalyticsBackend) {
///     let request = StartupRequest::new("app-id", "https://beacon.example.com");
///     match backend.startup(&request) {
///         Ok(status) => println!("agent status: {status}"),
///         Err(fault) => eprintln!("agent fault: {fault}"),
///     }
/// }
/// ```
pub trait AnalyticsBackend: Send + Sync {
    /// Initialize the agent and begin a monitoring session.
    ///
    /// Agents ignore repeated calls until the session is shut down.
    fn startup(&self, request: &StartupRequest) -> Result<StatusCode>;

    /// Tear down the current monitoring session.
    ///
    /// Safe to call without a prior `startup`; the agent defines the
    /// behavior of redundant calls.
    fn shutdown(&self) -> Result<()>;

    /// Open a named action and return its handle.
    fn enter_action(&self, name: &str) -> Result<Box<dyn ActionHandle>>;
}

/// An in-flight named action owned by the agent.
///
/// The handle must be closed with [`leave`](ActionHandle::leave) for the
/// agent to record the interval. A second `leave` on the same handle yields
/// [`StatusCode::ActionEnded`].
pub trait ActionHandle: Send {
    /// The name the action was entered with.
    fn name(&self) -> &str;

    /// Close the action and record its interval.
    fn leave(&self) -> Result<StatusCode>;
}
