//! # Price Ops
//!
//! > **Audited price mutations against a warehouse of stored procedures.**
//!
//! This crate exposes four operations on the price table (`update`, `insert`,
//! `delete`, `reactivate`). Each one derives an audit name from the caller,
//! validates its input, calls exactly one stored procedure with bound
//! parameters, commits, and returns a one-line summary such as:
//!
//! ```text
//! Bob Smith updated 5 price(s) on 2026-01-12 14:30:45
//! ```
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One pipeline, four descriptors
//! The four operations only differ in their fields, the order of the procedure
//! parameters, and the wording of the summary. That lives in a descriptor
//! table ([`OperationKind::descriptor`](operations::OperationKind::descriptor)),
//! and a single [`Pipeline`](pipeline::Pipeline) runs all of them.
//!
//! ### Explicit dependencies
//! The store, the clock and the configuration are handed to the pipeline when
//! it is built. Nothing is ambient, so tests run against
//! [`MockConnector`](store::mock::MockConnector) and a fixed clock.
//!
//! ### Errors as values
//! Every operation returns `Result<String, PriceError>`:
//! - [`PriceError::InvalidInput`](operations::PriceError::InvalidInput) when a
//!   field fails validation (the store is never called)
//! - [`PriceError::MutationFailed`](operations::PriceError::MutationFailed)
//!   when connecting, executing or committing fails
//!
//! A caller identity that cannot be read never fails an operation; it is
//! recorded as `"Unknown User"`.
//!
//! ## 🗺️ Module Tour
//!
//! - [`identity`] - display name derivation
//! - [`validation`] - `price` and `sku` checks
//! - [`operations`] - operation kinds, requests, errors
//! - [`store`] - the connector seam, statements, and the [`store::mock`] fake
//! - [`pipeline`] - mutation invoker and result composer
//! - [`clients`] - the async [`PriceOperations`](clients::PriceOperations) surface
//! - [`runtime`] - configuration and tracing
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! let client = PriceClient::from_env(my_connector)?;
//! let identity = CallerIdentity::from_username("bob.smith@co.com");
//! let summary = client.update(&identity, "1,2,3", "19.99").await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod clients;
pub mod identity;
pub mod operations;
pub mod pipeline;
pub mod runtime;
pub mod store;
pub mod validation;
