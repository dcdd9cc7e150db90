#![deny(clippy::all)]

//! Angular Core - render-time view data
//!
//! Per-view slot table shared between the template compiler output and the
//! rendering engine, plus the Trusted Types bypass policy used by sinks that
//! receive markup, script or script URL strings.

// Root level modules
mod config;
mod error;

// Runtime modules
pub mod render3;
pub mod sanitization;

// Re-exports
pub use config::{CoreConfig, TrustedTypesConfig, DEFAULT_POLICY_NAME};
pub use error::{PolicyCreationError, Result, ViewDataError};
