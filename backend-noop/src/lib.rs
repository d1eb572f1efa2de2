//! # No-op Backend Implementation
//!
//! Default implementation of the analytics backend capability for builds
//! without a linked vendor monitoring agent (desktop shells, unit tests, CI).
//!
//! ## Overview
//!
//! [`NoopBackend`] mirrors the observable edge behavior of the real mobile
//! agents without reporting anywhere:
//! - empty startup parameters are rejected with a status code
//! - repeated startup calls between shutdowns are ignored
//! - actions entered before startup fail
//! - a second leave on the same action yields `ActionEnded`
//!
//! ## Usage
//!
//! ```ignore
//! use backend_noop::NoopBackend;
//! use core_bridge::AnalyticsBridge;
//! use std::sync::Arc;
//!
//! let bridge = AnalyticsBridge::new(Arc::new(NoopBackend::new()));
//! ```

mod backend;

pub use backend::{NoopAction, NoopBackend};
