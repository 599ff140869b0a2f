//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber for hosts that do
//! not bring their own.
//!
//! ## What Gets Traced
//!
//! - **Operations**: one `debug` span per call (`update`, `insert`, `delete`, `reactivate`)
//!   carrying the caller and the request fields
//! - **Validation**: the rejected field name (the raw value only at `debug`)
//! - **Store calls**: procedure name, rows affected, commit
//! - **Errors**: the operation and the underlying store failure
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo test
//!
//! # Request payloads and bound parameters
//! RUST_LOG=debug cargo test
//!
//! # Store calls only
//! RUST_LOG=price_ops::pipeline=debug cargo test
//! ```
//!
//! Parameter values are only ever logged at `debug`.
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Price mutation applied operation=update rows_affected=5 user_name=Bob Smith
//! WARN Price mutation rejected operation=insert field=price error=Invalid price: must be a numeric value.
//! ```

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // the span name already says which operation ran
        .compact()
        .try_init();
}
