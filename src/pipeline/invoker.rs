//! # Mutation Invoker
//!
//! Runs one statement on one connection and commits it. The connection is
//! dropped on every exit path, so a failure before the commit discards the
//! work.

use crate::operations::{OperationKind, PriceError};
use crate::store::{Connector, StoreError, Statement};
use tracing::{debug, warn};

/// Applies `statement` and returns the affected-row count.
///
/// A missing result row counts as 0. Any store failure becomes
/// [`PriceError::MutationFailed`] for `kind`.
pub fn invoke(
    connector: &dyn Connector,
    kind: OperationKind,
    statement: &Statement,
) -> Result<i64, PriceError> {
    apply(connector, statement).map_err(|e| {
        warn!(operation = %kind, procedure = statement.procedure(), error = %e, "Store call failed");
        PriceError::mutation_failed(kind, e)
    })
}

fn apply(connector: &dyn Connector, statement: &Statement) -> Result<i64, StoreError> {
    let mut conn = connector.connect()?;
    debug!(procedure = statement.procedure(), params = ?statement.params(), "Executing");

    let rows_affected = match conn.execute(statement)? {
        Some(row) => *row
            .first()
            .ok_or_else(|| StoreError::MalformedRow("row has no columns".to_string()))?,
        None => 0,
    };

    conn.commit()?;
    debug!(procedure = statement.procedure(), rows_affected, "Committed");
    Ok(rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::OperationRequest;
    use crate::runtime::PriceOpsConfig;
    use crate::store::mock::MockConnector;

    fn delete_statement() -> Statement {
        let request = OperationRequest::Delete { ids: "4,5".into() };
        Statement::for_request(&PriceOpsConfig::default(), &request, "Ann Lee")
    }

    #[test]
    fn test_reads_first_column_and_commits() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete).return_row(vec![2, 99]);

        let rows = invoke(&mock, OperationKind::Delete, &delete_statement());

        assert_eq!(rows, Ok(2));
        assert_eq!(mock.commits(), 1);
        assert_eq!(mock.open_connections(), 0);
        mock.verify();
    }

    #[test]
    fn test_no_row_counts_as_zero() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete).return_no_row();

        assert_eq!(invoke(&mock, OperationKind::Delete, &delete_statement()), Ok(0));
        assert_eq!(mock.commits(), 1);
    }

    #[test]
    fn test_empty_row_fails_without_commit() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete).return_row(vec![]);

        let err = invoke(&mock, OperationKind::Delete, &delete_statement()).unwrap_err();

        assert!(matches!(err, PriceError::MutationFailed { operation: OperationKind::Delete, .. }));
        assert_eq!(mock.commits(), 0);
        assert_eq!(mock.rollbacks(), 1);
    }

    #[test]
    fn test_commit_failure_is_mutation_failed() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete)
            .fail_commit(StoreError::Commit("log full".into()))
            .return_row(vec![2]);

        let err = invoke(&mock, OperationKind::Delete, &delete_statement()).unwrap_err();

        assert_eq!(
            err,
            PriceError::mutation_failed(OperationKind::Delete, "commit failed: log full")
        );
        assert_eq!(mock.open_connections(), 0);
    }

    #[test]
    fn test_connect_failure_is_mutation_failed() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete)
            .fail_connect(StoreError::Connect("login timeout".into()));

        let err = invoke(&mock, OperationKind::Delete, &delete_statement()).unwrap_err();

        assert_eq!(
            err,
            PriceError::mutation_failed(OperationKind::Delete, "connection failed: login timeout")
        );
        assert!(mock.statements().is_empty());
    }
}
