//! No-op Analytics Backend Implementation

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use backend_traits::{
    analytics::{ActionHandle, AnalyticsBackend, StartupRequest},
    error::{BackendError, Result},
    status::StatusCode,
};
use tracing::debug;

/// Stand-in agent used when no vendor monitoring agent is linked into the
/// host application.
///
/// Holds only a started flag and an action counter; nothing is buffered and
/// nothing leaves the process.
pub struct NoopBackend {
    started: AtomicBool,
    actions_entered: AtomicU64,
}

impl NoopBackend {
    /// Create a new backend with monitoring not yet started.
    pub fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
            actions_entered: AtomicU64::new(0),
        }
    }

    /// Whether a startup has been accepted and not shut down since.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of actions entered since construction.
    pub fn actions_entered(&self) -> u64 {
        self.actions_entered.load(Ordering::Relaxed)
    }
}

impl Default for NoopBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsBackend for NoopBackend {
    fn startup(&self, request: &StartupRequest) -> Result<StatusCode> {
        if request.app_id.is_empty() || request.server_url.is_empty() {
            return Ok(StatusCode::InvalidParameter);
        }

        if self.started.swap(true, Ordering::SeqCst) {
            // the real agents ignore repeated startup calls until shutdown
            return Ok(StatusCode::CaptureOn);
        }

        debug!(app_id = %request.app_id, server_url = %request.server_url, "noop agent started");
        Ok(StatusCode::CaptureOn)
    }

    fn shutdown(&self) -> Result<()> {
        self.started.store(false, Ordering::SeqCst);
        debug!("noop agent shut down");
        Ok(())
    }

    fn enter_action(&self, name: &str) -> Result<Box<dyn ActionHandle>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err(BackendError::NotAvailable(
                "agent not initialized; call startup first".to_string(),
            ));
        }

        self.actions_entered.fetch_add(1, Ordering::Relaxed);
        debug!(action = name, "action entered");

        Ok(Box::new(NoopAction {
            name: name.to_string(),
            left: AtomicBool::new(false),
        }))
    }
}

/// Action handle produced by [`NoopBackend`].
pub struct NoopAction {
    name: String,
    left: AtomicBool,
}

impl ActionHandle for NoopAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn leave(&self) -> Result<StatusCode> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(StatusCode::ActionEnded);
        }

        debug!(action = %self.name, "action left");
        Ok(StatusCode::CaptureOn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_rejects_empty_parameters() {
        let backend = NoopBackend::new();

        let request = StartupRequest::new("", "");
        assert_eq!(
            backend.startup(&request).unwrap(),
            StatusCode::InvalidParameter
        );
        assert!(!backend.is_started());

        let request = StartupRequest::new("app1", "");
        assert_eq!(
            backend.startup(&request).unwrap(),
            StatusCode::InvalidParameter
        );
    }

    #[test]
    fn test_startup_shutdown_lifecycle() {
        let backend = NoopBackend::new();
        let request = StartupRequest::new("app1", "https://example.com");

        assert_eq!(backend.startup(&request).unwrap(), StatusCode::CaptureOn);
        assert!(backend.is_started());

        backend.shutdown().unwrap();
        assert!(!backend.is_started());

        // shutdown without a session is forwarded and harmless
        backend.shutdown().unwrap();
    }

    #[test]
    fn test_repeated_startup_is_ignored() {
        let backend = NoopBackend::new();
        let request = StartupRequest::new("app1", "https://example.com");

        assert_eq!(backend.startup(&request).unwrap(), StatusCode::CaptureOn);
        assert_eq!(backend.startup(&request).unwrap(), StatusCode::CaptureOn);
        assert!(backend.is_started());
    }

    #[test]
    fn test_enter_action_requires_startup() {
        let backend = NoopBackend::new();

        let err = backend.enter_action("checkout").unwrap_err();
        assert!(matches!(err, BackendError::NotAvailable(_)));
        assert_eq!(backend.actions_entered(), 0);
    }

    #[test]
    fn test_action_leave_and_double_leave() {
        let backend = NoopBackend::new();
        let request = StartupRequest::new("app1", "https://example.com");
        backend.startup(&request).unwrap();

        let action = backend.enter_action("checkout").unwrap();
        assert_eq!(action.name(), "checkout");
        assert_eq!(action.leave().unwrap(), StatusCode::CaptureOn);
        assert_eq!(action.leave().unwrap(), StatusCode::ActionEnded);
    }

    #[test]
    fn test_action_counter() {
        let backend = NoopBackend::new();
        let request = StartupRequest::new("app1", "https://example.com");
        backend.startup(&request).unwrap();

        backend.enter_action("a").unwrap();
        backend.enter_action("b").unwrap();
        assert_eq!(backend.actions_entered(), 2);
    }
}
