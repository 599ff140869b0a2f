//! # Store seam
//!
//! The backing store is an external collaborator. This module describes the
//! little we need from it: open a connection, run one parameterized statement,
//! read back one row, commit.
//!
//! The seam is synchronous. Drivers behind it are expected to block; the
//! async [`PriceClient`](crate::clients::PriceClient) moves store work onto
//! the blocking pool.
//!
//! A [`Connection`] is released by dropping it. Dropping a connection that
//! was never committed must discard its work.

pub mod mock;

use crate::operations::{OperationKind, OperationRequest};
use crate::runtime::PriceOpsConfig;
use thiserror::Error;

/// Failures reported by a store driver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("statement failed: {0}")]
    Execute(String),

    #[error("commit failed: {0}")]
    Commit(String),

    #[error("malformed result row: {0}")]
    MalformedRow(String),
}

/// One result row. Columns are integers; the price procedures return a single
/// `rows_affected` column.
pub type Row = Vec<i64>;

/// A call to one price procedure.
///
/// The text only ever contains `?` placeholders; values travel separately in
/// [`Statement::params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    procedure: String,
    text: String,
    params: Vec<String>,
}

impl Statement {
    /// Builds the `EXEC` call for `request`, binding `user_name` as the audit
    /// parameter.
    pub fn for_request(config: &PriceOpsConfig, request: &OperationRequest, user_name: &str) -> Self {
        let kind = request.kind();
        let procedure = procedure_name(config, kind);
        let placeholders = kind
            .descriptor()
            .params
            .iter()
            .map(|param| format!("{} = ?", param.name()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            text: format!("EXEC {procedure} {placeholders};"),
            procedure,
            params: request.bind(user_name),
        }
    }

    /// Three-part name, `database.schema.procedure`.
    pub fn procedure(&self) -> &str {
        &self.procedure
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Positional values, in placeholder order.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Three-part name of the procedure behind `kind`.
pub fn procedure_name(config: &PriceOpsConfig, kind: OperationKind) -> String {
    format!(
        "{}.{}.{}",
        config.database,
        config.schema,
        kind.descriptor().procedure
    )
}

/// Opens connections to the backing store.
pub trait Connector: Send + Sync + 'static {
    fn connect(&self) -> Result<Box<dyn Connection>, StoreError>;
}

/// An open connection holding one unit of work.
pub trait Connection: Send {
    /// Runs `statement` and returns its first result row, if any.
    fn execute(&mut self, statement: &Statement) -> Result<Option<Row>, StoreError>;

    /// Makes the work done on this connection durable.
    fn commit(&mut self) -> Result<(), StoreError>;
}
