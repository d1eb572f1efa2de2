//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-bridge`, `backend-noop`). Host applications
//! can depend on `uem-bridge-workspace` and enable the documented features
//! without needing to wire each crate individually.
