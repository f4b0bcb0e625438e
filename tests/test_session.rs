//! Integration tests for transaction and savepoint scoping helpers.

use std::sync::{Arc, Mutex};

use arrow_display_rs::{with_savepoint, with_transaction, Error, Result, StatementExecutor};

/// Statement log shared with the unit of work, so tests can assert on
/// ordering across the helper boundary.
#[derive(Clone, Default)]
struct FakeSession {
    log: Arc<Mutex<Vec<String>>>,
}

impl FakeSession {
    fn statements(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl StatementExecutor for FakeSession {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.log.lock().unwrap().push(sql.to_string());
        if sql.contains("FAIL") {
            return Err(Error::execution(format!("cannot run: {}", sql)));
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_transaction_wraps_work_statements() {
    let mut session = FakeSession::default();
    let mut inner = session.clone();

    let result = with_transaction(&mut session, || async move {
        inner.execute("INSERT INTO t VALUES (1)").await?;
        inner.execute("INSERT INTO t VALUES (2)").await?;
        Ok(())
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(
        session.statements(),
        vec![
            "BEGIN TRANSACTION",
            "INSERT INTO t VALUES (1)",
            "INSERT INTO t VALUES (2)",
            "COMMIT",
        ]
    );
}

#[tokio::test]
async fn test_transaction_rolls_back_on_work_failure() {
    let mut session = FakeSession::default();
    let mut inner = session.clone();

    let result = with_transaction(&mut session, || async move {
        inner.execute("INSERT INTO t VALUES (1)").await?;
        inner.execute("FAIL").await?;
        inner.execute("INSERT INTO t VALUES (2)").await
    })
    .await;

    assert!(matches!(result, Err(Error::Execution { .. })));
    assert_eq!(
        session.statements(),
        vec![
            "BEGIN TRANSACTION",
            "INSERT INTO t VALUES (1)",
            "FAIL",
            "ROLLBACK",
        ]
    );
}

#[tokio::test]
async fn test_savepoint_release_and_rollback() {
    let mut session = FakeSession::default();

    let ok = with_savepoint(&mut session, "sp_outer", || async { Ok(1) }).await;
    assert_eq!(ok.unwrap(), 1);

    let failed: Result<()> = with_savepoint(&mut session, "sp_outer", || async {
        Err(Error::execution("denied"))
    })
    .await;
    assert!(failed.is_err());

    assert_eq!(
        session.statements(),
        vec![
            "SAVEPOINT sp_outer",
            "RELEASE SAVEPOINT sp_outer",
            "SAVEPOINT sp_outer",
            "ROLLBACK TO SAVEPOINT sp_outer",
        ]
    );
}

#[tokio::test]
async fn test_nested_savepoints() {
    let mut session = FakeSession::default();
    let outer = session.clone();

    let result = with_savepoint(&mut session, "outer", || async move {
        let mut inner_session = outer.clone();
        with_savepoint(&mut inner_session, "inner", || async {
            Err::<(), _>(Error::execution("inner fails"))
        })
        .await
        .ok();
        Ok("outer survives")
    })
    .await;

    assert_eq!(result.unwrap(), "outer survives");
    assert_eq!(
        session.statements(),
        vec![
            "SAVEPOINT outer",
            "SAVEPOINT inner",
            "ROLLBACK TO SAVEPOINT inner",
            "RELEASE SAVEPOINT outer",
        ]
    );
}
