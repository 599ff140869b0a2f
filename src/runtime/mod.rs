//! Runtime concerns shared by every operation: configuration and tracing.
//!
//! - [`PriceOpsConfig`] - procedure namespace and reference time zone
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
