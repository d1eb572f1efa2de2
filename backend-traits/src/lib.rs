//! # Analytics Backend Traits
//!
//! Capability contract between the analytics bridge facade and the
//! platform-specific monitoring agent that implements it.
//!
//! ## Overview
//!
//! This crate defines the contract the bridge requires from an analytics
//! backend. The backend is opaque: it owns the monitoring session, the beacon
//! transport, buffering, and retries. The bridge only forwards calls through
//! the traits defined here and reports the status codes it gets back.
//!
//! ## Traits
//!
//! - [`AnalyticsBackend`](analytics::AnalyticsBackend) - Agent lifecycle and action reporting
//! - [`ActionHandle`](analytics::ActionHandle) - An in-flight named action owned by the agent
//! - [`HostLogger`](logging::HostLogger) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! Each supported host ships a concrete adapter for the backend capability:
//!
//! | Platform | Implementation Crate | Backing agent |
//! |----------|---------------------|---------------|
//! | Android  | host adapter        | vendor mobile agent via JNI |
//! | iOS      | host adapter        | vendor mobile agent via FFI |
//! | Desktop / CI | `backend-noop`  | none (monitoring disabled) |
//!
//! ## Fail-Fast Strategy
//!
//! Consumers should fail fast with descriptive errors when the backend
//! capability is missing rather than silently dropping telemetry:
//!
//! ```ignore
//! use core_bridge::error::Error;
//!
//! let backend = config.backend.ok_or_else(|| Error::CapabilityMissing {
//!     capability: "AnalyticsBackend".to_string(),
//!     message: "No analytics backend provided. \
//!               Desktop/dev: enable the `noop-backend` feature. \
//!               Mobile: inject the platform agent adapter.".to_string(),
//! })?;
//! ```
//!
//! ## Error Handling
//!
//! All backend traits use the [`BackendError`](error::BackendError) type.
//! Adapter implementations should:
//!
//! - Convert platform-specific faults to `BackendError`
//! - Report recoverable conditions through [`StatusCode`](status::StatusCode)
//!   values rather than faults
//! - Provide actionable error messages
//!
//! ## Thread Safety
//!
//! [`AnalyticsBackend`](analytics::AnalyticsBackend) requires `Send + Sync`
//! so a single adapter can be shared behind an `Arc` across threads. The
//! contract imposes no call ordering of its own; session discipline
//! (startup before actions, shutdown last) belongs to the agent.
//!
//! ## Examples
//!
//! ### Implementing AnalyticsBackend
//!
//! ```ignore
//! use backend_traits::analytics::{ActionHandle, AnalyticsBackend, StartupRequest};
//! use backend_traits::error::Result;
//! use backend_traits::status::StatusCode;
//!
//! pub struct JniBackend {
//!     // platform context captured at construction
//! }
//!
//! impl AnalyticsBackend for JniBackend {
//!     fn startup(&self, request: &StartupRequest) -> Result<StatusCode> {
//!         todo!()
//!     }
//!
//!     fn shutdown(&self) -> Result<()> {
//!         todo!()
//!     }
//!
//!     fn enter_action(&self, name: &str) -> Result<Box<dyn ActionHandle>> {
//!         todo!()
//!     }
//! }
//! ```

pub mod analytics;
pub mod error;
pub mod logging;
pub mod status;

pub use error::BackendError;

// Re-export commonly used types
pub use analytics::{ActionHandle, AnalyticsBackend, StartupRequest};
pub use logging::{ConsoleLogger, HostLogger, LogEntry, LogLevel};
pub use status::StatusCode;
