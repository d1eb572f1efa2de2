//! Analytics Bridge Facade
//!
//! The three-operation surface exposed to host applications, forwarding into
//! an injected [`AnalyticsBackend`].

use std::sync::Arc;

use backend_traits::analytics::{AnalyticsBackend, StartupRequest};
use backend_traits::status::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::BridgeConfig;
use crate::error::Result;

/// Result of a startup call, as reported by the agent.
///
/// A non-success outcome is a reported result, not a fault; faults raised by
/// the backend surface as [`Error::Backend`](crate::error::Error::Backend)
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartupOutcome {
    /// Agent accepted the configuration and is capturing.
    Success,
    /// Application id or server URL was null or empty.
    InvalidParameter,
    /// The agent returned a code this crate does not recognize; the raw
    /// code is carried verbatim.
    UnknownStatus(i32),
}

impl From<StatusCode> for StartupOutcome {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::CaptureOn => Self::Success,
            StatusCode::InvalidParameter => Self::InvalidParameter,
            other => Self::UnknownStatus(other.as_raw()),
        }
    }
}

/// Facade over an injected analytics backend.
///
/// The bridge holds no session state of its own; the agent owns the session
/// between `startup` and `shutdown`. Every method runs synchronously to
/// completion on the caller's thread and forwards into the backend without
/// validating arguments or catching backend faults.
#[derive(Clone)]
pub struct AnalyticsBridge {
    backend: Arc<dyn AnalyticsBackend>,
    allow_untrusted_certs: bool,
    certificate_path: Option<String>,
}

impl AnalyticsBridge {
    /// Create a bridge over an explicit backend with strict TLS defaults.
    pub fn new(backend: Arc<dyn AnalyticsBackend>) -> Self {
        Self {
            backend,
            allow_untrusted_certs: false,
            certificate_path: None,
        }
    }

    /// Create a bridge from a validated configuration.
    pub fn from_config(config: BridgeConfig) -> Self {
        Self {
            backend: config.backend,
            allow_untrusted_certs: config.allow_untrusted_certs,
            certificate_path: config.certificate_path,
        }
    }

    /// Access the backend in use.
    pub fn backend(&self) -> Arc<dyn AnalyticsBackend> {
        Arc::clone(&self.backend)
    }

    /// Start a monitoring session for `app_id` reporting to `server_url`.
    ///
    /// Forwards one startup call and maps the agent's status code to a
    /// [`StartupOutcome`]. Argument validation is the agent's job; an empty
    /// id or URL comes back as [`StartupOutcome::InvalidParameter`].
    pub fn startup(&self, app_id: &str, server_url: &str) -> Result<StartupOutcome> {
        let mut request = StartupRequest::new(app_id, server_url)
            .with_untrusted_certs(self.allow_untrusted_certs);
        if let Some(path) = &self.certificate_path {
            request = request.with_certificate_path(path.clone());
        }

        let status = self.backend.startup(&request)?;
        let outcome = StartupOutcome::from(status);

        match outcome {
            StartupOutcome::Success => {
                info!(app_id, "agent startup successful");
            }
            StartupOutcome::InvalidParameter => {
                error!(
                    app_id,
                    "agent startup rejected: application id or server URL is null or empty"
                );
            }
            StartupOutcome::UnknownStatus(code) => {
                warn!(app_id, code, "agent startup returned unrecognized status");
            }
        }

        Ok(outcome)
    }

    /// Tear down the current monitoring session.
    ///
    /// Forwards unconditionally; repeated calls are forwarded as-is and the
    /// agent defines their behavior.
    pub fn shutdown(&self) -> Result<()> {
        self.backend.shutdown()?;
        debug!("agent shutdown forwarded");
        Ok(())
    }

    /// Report a named action to the agent.
    ///
    /// The handle is closed before this method returns, so callers never
    /// hold an open action and every recorded interval has zero duration.
    pub fn enter_action(&self, name: &str) -> Result<()> {
        let action = self.backend.enter_action(name)?;
        let status = action.leave()?;

        if !status.is_success() {
            debug!(action = name, status = %status, "action leave reported non-success");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use backend_traits::analytics::ActionHandle;
    use backend_traits::error::BackendError;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        Backend {}

        impl AnalyticsBackend for Backend {
            fn startup(&self, request: &StartupRequest) -> backend_traits::error::Result<StatusCode>;
            fn shutdown(&self) -> backend_traits::error::Result<()>;
            fn enter_action(&self, name: &str) -> backend_traits::error::Result<Box<dyn ActionHandle>>;
        }
    }

    /// Backend double that records every call in order.
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<String>>,
    }

    impl CallLog {
        fn push(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct RecordingBackend {
        log: Arc<CallLog>,
    }

    impl AnalyticsBackend for RecordingBackend {
        fn startup(&self, request: &StartupRequest) -> backend_traits::error::Result<StatusCode> {
            self.log
                .push(format!("startup({},{})", request.app_id, request.server_url));
            Ok(StatusCode::CaptureOn)
        }

        fn shutdown(&self) -> backend_traits::error::Result<()> {
            self.log.push("shutdown");
            Ok(())
        }

        fn enter_action(
            &self,
            name: &str,
        ) -> backend_traits::error::Result<Box<dyn ActionHandle>> {
            self.log.push(format!("enter_action({name})"));
            Ok(Box::new(RecordingAction {
                name: name.to_string(),
                log: Arc::clone(&self.log),
            }))
        }
    }

    struct RecordingAction {
        name: String,
        log: Arc<CallLog>,
    }

    impl ActionHandle for RecordingAction {
        fn name(&self) -> &str {
            &self.name
        }

        fn leave(&self) -> backend_traits::error::Result<StatusCode> {
            self.log.push(format!("leave({})", self.name));
            Ok(StatusCode::CaptureOn)
        }
    }

    fn recording_bridge() -> (AnalyticsBridge, Arc<CallLog>) {
        let log = Arc::new(CallLog::default());
        let bridge = AnalyticsBridge::new(Arc::new(RecordingBackend {
            log: Arc::clone(&log),
        }));
        (bridge, log)
    }

    #[test]
    fn test_startup_maps_success_code() {
        let mut backend = MockBackend::new();
        backend
            .expect_startup()
            .withf(|request| request.app_id == "app1" && request.server_url == "https://example.com")
            .returning(|_| Ok(StatusCode::CaptureOn));

        let bridge = AnalyticsBridge::new(Arc::new(backend));
        let outcome = bridge.startup("app1", "https://example.com").unwrap();

        assert_eq!(outcome, StartupOutcome::Success);
    }

    #[test]
    fn test_startup_maps_invalid_parameter_code() {
        let mut backend = MockBackend::new();
        backend
            .expect_startup()
            .returning(|_| Ok(StatusCode::InvalidParameter));

        let bridge = AnalyticsBridge::new(Arc::new(backend));
        let outcome = bridge.startup("", "").unwrap();

        assert_eq!(outcome, StartupOutcome::InvalidParameter);
    }

    #[test]
    fn test_startup_carries_unrecognized_codes_verbatim() {
        for raw in [1, -1, -3, 42, -77] {
            let mut backend = MockBackend::new();
            backend
                .expect_startup()
                .returning(move |_| Ok(StatusCode::from_raw(raw)));

            let bridge = AnalyticsBridge::new(Arc::new(backend));
            let outcome = bridge.startup("app1", "https://example.com").unwrap();

            assert_eq!(outcome, StartupOutcome::UnknownStatus(raw));
        }
    }

    #[test]
    fn test_startup_propagates_backend_fault() {
        let mut backend = MockBackend::new();
        backend
            .expect_startup()
            .returning(|_| Err(BackendError::OperationFailed("agent crashed".to_string())));

        let bridge = AnalyticsBridge::new(Arc::new(backend));
        let err = bridge.startup("app1", "https://example.com").unwrap_err();

        assert!(matches!(err, Error::Backend(BackendError::OperationFailed(_))));
    }

    #[test]
    fn test_startup_request_uses_strict_tls_defaults() {
        let mut backend = MockBackend::new();
        backend
            .expect_startup()
            .withf(|request| !request.allow_untrusted_certs && request.certificate_path.is_none())
            .returning(|_| Ok(StatusCode::CaptureOn));

        let bridge = AnalyticsBridge::new(Arc::new(backend));
        bridge.startup("app1", "https://example.com").unwrap();
    }

    #[test]
    fn test_shutdown_forwards_exactly_one_call() {
        let (bridge, log) = recording_bridge();

        bridge.shutdown().unwrap();
        assert_eq!(log.calls(), vec!["shutdown"]);

        // repeated calls are forwarded as-is
        bridge.shutdown().unwrap();
        assert_eq!(log.calls(), vec!["shutdown", "shutdown"]);
    }

    #[test]
    fn test_enter_action_leaves_immediately() {
        let (bridge, log) = recording_bridge();

        bridge.enter_action("checkout").unwrap();

        assert_eq!(log.calls(), vec!["enter_action(checkout)", "leave(checkout)"]);
    }

    #[test]
    fn test_enter_action_propagates_backend_fault() {
        let mut backend = MockBackend::new();
        backend.expect_enter_action().returning(|_| {
            Err(BackendError::NotAvailable("agent not initialized".to_string()))
        });

        let bridge = AnalyticsBridge::new(Arc::new(backend));
        let err = bridge.enter_action("too-early").unwrap_err();

        assert!(matches!(err, Error::Backend(BackendError::NotAvailable(_))));
    }

    #[test]
    fn test_startup_scenario_success() {
        let (bridge, log) = recording_bridge();

        let outcome = bridge.startup("app1", "https://example.com").unwrap();

        assert_eq!(outcome, StartupOutcome::Success);
        assert_eq!(log.calls(), vec!["startup(app1,https://example.com)"]);
    }

    #[test]
    fn test_outcome_from_status_mapping() {
        assert_eq!(
            StartupOutcome::from(StatusCode::CaptureOn),
            StartupOutcome::Success
        );
        assert_eq!(
            StartupOutcome::from(StatusCode::InvalidParameter),
            StartupOutcome::InvalidParameter
        );
        assert_eq!(
            StartupOutcome::from(StatusCode::CaptureOff),
            StartupOutcome::UnknownStatus(1)
        );
        assert_eq!(
            StartupOutcome::from(StatusCode::Unknown(99)),
            StartupOutcome::UnknownStatus(99)
        );
    }

    #[test]
    fn test_outcome_serializes_for_host_marshaling() {
        let json = serde_json::to_value(StartupOutcome::UnknownStatus(-3)).unwrap();
        assert_eq!(json["UnknownStatus"], -3);

        let json = serde_json::to_value(StartupOutcome::Success).unwrap();
        assert_eq!(json, "Success");
    }
}
