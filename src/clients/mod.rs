//! Async entry points for hosting adapters.

pub mod price_client;
pub mod price_operations;

pub use price_client::*;
pub use price_operations::*;
