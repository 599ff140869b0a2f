//! # Mock Store
//!
//! A scripted [`Connector`] for testing the price operations without a live
//! store.
//!
//! Queue one expectation per invocation with [`MockConnector::expect_call`],
//! hand a clone of the connector to the code under test, then inspect what
//! reached the store and call [`MockConnector::verify`].
//!
//! ```ignore
//! let mock = MockConnector::new();
//! mock.expect_call(OperationKind::Update).return_row(vec![5]);
//!
//! let client = PriceClient::new(mock.clone(), PriceOpsConfig::default())?;
//! // ...
//! assert_eq!(mock.commits(), 1);
//! mock.verify();
//! ```

use crate::operations::OperationKind;
use crate::store::{Connection, Connector, Row, StoreError, Statement};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Scripted behaviour for one connection.
struct Expectation {
    kind: OperationKind,
    connect: Result<(), StoreError>,
    response: Result<Option<Row>, StoreError>,
    commit: Result<(), StoreError>,
}

/// Everything that reached the store.
#[derive(Default)]
struct Journal {
    opened: usize,
    closed: usize,
    commits: usize,
    rollbacks: usize,
    statements: Vec<Statement>,
}

#[derive(Default)]
struct Shared {
    expectations: VecDeque<Expectation>,
    journal: Journal,
}

/// A connector that replays queued expectations and records every call.
///
/// Clones share the same queue and journal.
#[derive(Clone, Default)]
pub struct MockConnector {
    shared: Arc<Mutex<Shared>>,
}

impl MockConnector {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one invocation of the procedure behind `kind`.
    pub fn expect_call(&self, kind: OperationKind) -> CallExpectationBuilder {
        CallExpectationBuilder {
            kind,
            commit: Ok(()),
            shared: self.shared.clone(),
        }
    }

    /// Statements executed so far, in order.
    pub fn statements(&self) -> Vec<Statement> {
        self.shared.lock().unwrap().journal.statements.clone()
    }

    /// Number of successful commits.
    pub fn commits(&self) -> usize {
        self.shared.lock().unwrap().journal.commits
    }

    /// Number of connections dropped without a successful commit.
    pub fn rollbacks(&self) -> usize {
        self.shared.lock().unwrap().journal.rollbacks
    }

    /// Number of connections handed out.
    pub fn connections_opened(&self) -> usize {
        self.shared.lock().unwrap().journal.opened
    }

    /// Number of connections handed out and not yet released.
    pub fn open_connections(&self) -> usize {
        let shared = self.shared.lock().unwrap();
        shared.journal.opened - shared.journal.closed
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let shared = self.shared.lock().unwrap();
        if !shared.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                shared.expectations.len()
            );
        }
    }
}

/// Builder for one store invocation.
pub struct CallExpectationBuilder {
    kind: OperationKind,
    commit: Result<(), StoreError>,
    shared: Arc<Mutex<Shared>>,
}

impl CallExpectationBuilder {
    /// Makes the commit of this invocation fail.
    pub fn fail_commit(mut self, error: StoreError) -> Self {
        self.commit = Err(error);
        self
    }

    /// The procedure returns one row.
    pub fn return_row(self, row: Row) {
        self.push(Ok(()), Ok(Some(row)));
    }

    /// The procedure returns no row at all.
    pub fn return_no_row(self) {
        self.push(Ok(()), Ok(None));
    }

    /// The procedure fails while executing.
    pub fn return_err(self, error: StoreError) {
        self.push(Ok(()), Err(error));
    }

    /// The connection cannot be opened.
    pub fn fail_connect(self, error: StoreError) {
        self.push(Err(error), Ok(None));
    }

    fn push(self, connect: Result<(), StoreError>, response: Result<Option<Row>, StoreError>) {
        let mut shared = self.shared.lock().unwrap();
        shared.expectations.push_back(Expectation {
            kind: self.kind,
            connect,
            response,
            commit: self.commit,
        });
    }
}

// =============================================================================
// CONNECTOR / CONNECTION
// =============================================================================

impl Connector for MockConnector {
    fn connect(&self) -> Result<Box<dyn Connection>, StoreError> {
        let mut shared = self.shared.lock().unwrap();
        let next = shared.expectations.pop_front();
        let Some(expectation) = next else {
            // release the lock so the journal stays readable after the panic
            drop(shared);
            panic!("Unexpected connect: no expectation queued");
        };
        expectation.connect.clone()?;
        shared.journal.opened += 1;

        Ok(Box::new(MockConnection {
            expectation: Some(expectation),
            committed: false,
            shared: self.shared.clone(),
        }))
    }
}

struct MockConnection {
    expectation: Option<Expectation>,
    committed: bool,
    shared: Arc<Mutex<Shared>>,
}

impl MockConnection {
    fn expectation(&self) -> &Expectation {
        match &self.expectation {
            Some(expectation) => expectation,
            None => panic!("Connection used after its expectation was consumed"),
        }
    }
}

impl Connection for MockConnection {
    fn execute(&mut self, statement: &Statement) -> Result<Option<Row>, StoreError> {
        let expected = self.expectation().kind.descriptor().procedure;
        if !statement.procedure().ends_with(expected) {
            panic!(
                "Unexpected statement: expected {expected}, got {}",
                statement.procedure()
            );
        }
        self.shared
            .lock()
            .unwrap()
            .journal
            .statements
            .push(statement.clone());

        let already_executed = Err(StoreError::Execute("statement already executed".into()));
        let response = self
            .expectation
            .as_mut()
            .map(|e| std::mem::replace(&mut e.response, already_executed));
        match response {
            Some(response) => response,
            None => panic!("Connection used after its expectation was consumed"),
        }
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.expectation().commit.clone()?;
        self.committed = true;
        self.shared.lock().unwrap().journal.commits += 1;
        Ok(())
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        let mut shared = self.shared.lock().unwrap();
        shared.journal.closed += 1;
        if !self.committed {
            shared.journal.rollbacks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::OperationRequest;
    use crate::runtime::PriceOpsConfig;

    fn statement(request: OperationRequest) -> Statement {
        Statement::for_request(&PriceOpsConfig::default(), &request, "Test User")
    }

    #[test]
    fn test_mock_replays_and_records() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Delete).return_row(vec![2]);

        {
            let mut conn = mock.connect().unwrap();
            assert_eq!(mock.open_connections(), 1);
            let row = conn.execute(&statement(OperationRequest::Delete { ids: "1,2".into() }));
            assert_eq!(row, Ok(Some(vec![2])));
            conn.commit().unwrap();
        }

        assert_eq!(mock.open_connections(), 0);
        assert_eq!(mock.commits(), 1);
        assert_eq!(mock.rollbacks(), 0);
        assert_eq!(mock.statements().len(), 1);
        mock.verify();
    }

    #[test]
    fn test_uncommitted_connection_rolls_back() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Reactivate)
            .return_err(StoreError::Execute("boom".into()));

        {
            let mut conn = mock.connect().unwrap();
            let result = conn.execute(&statement(OperationRequest::Reactivate { ids: "3".into() }));
            assert!(result.is_err());
        }

        assert_eq!(mock.commits(), 0);
        assert_eq!(mock.rollbacks(), 1);
    }

    #[test]
    fn test_connect_failure_opens_nothing() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Update)
            .fail_connect(StoreError::Connect("unreachable".into()));

        assert!(mock.connect().is_err());
        assert_eq!(mock.connections_opened(), 0);
        mock.verify();
    }

    #[test]
    fn test_unexpected_connect_keeps_journal_readable() {
        let mock = MockConnector::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.connect()));

        assert!(result.is_err());
        assert_eq!(mock.connections_opened(), 0);
        assert_eq!(mock.commits(), 0);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_unmet_expectations() {
        let mock = MockConnector::new();
        mock.expect_call(OperationKind::Insert).return_no_row();
        mock.verify();
    }
}
