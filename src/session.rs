//! Transactional scoping helpers for a query session.
//!
//! The session layer itself (connection, worker, query execution) lives
//! outside this crate and is consumed through the [`StatementExecutor`]
//! capability. The helpers here only bracket a caller-supplied unit of work
//! with the transaction / savepoint statements: on failure they issue the
//! corresponding rollback and re-throw the original error unchanged — no
//! wrapping, no swallowing.

use std::future::Future;

use tracing::warn;

use crate::error::Result;

/// The opaque "execute a statement" capability of the session layer.
pub trait StatementExecutor {
    /// Execute a single SQL statement, discarding any result rows.
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Run a unit of work inside a transaction.
///
/// Issues `BEGIN TRANSACTION`, runs `work`, then `COMMIT` on success or
/// `ROLLBACK` on failure. The work's error propagates unchanged; a failure
/// of the rollback statement itself is logged but never replaces it.
pub async fn with_transaction<E, F, Fut, T>(exec: &mut E, work: F) -> Result<T>
where
    E: StatementExecutor + Send,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    exec.execute("BEGIN TRANSACTION").await?;
    match work().await {
        Ok(value) => {
            exec.execute("COMMIT").await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = exec.execute("ROLLBACK").await {
                warn!("ROLLBACK failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}

/// Run a unit of work inside a named savepoint.
///
/// Issues `SAVEPOINT <name>`, runs `work`, then `RELEASE SAVEPOINT <name>`
/// on success or `ROLLBACK TO SAVEPOINT <name>` on failure, re-throwing the
/// original error.
pub async fn with_savepoint<E, F, Fut, T>(exec: &mut E, name: &str, work: F) -> Result<T>
where
    E: StatementExecutor + Send,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    exec.execute(&format!("SAVEPOINT {}", name)).await?;
    match work().await {
        Ok(value) => {
            exec.execute(&format!("RELEASE SAVEPOINT {}", name)).await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = exec
                .execute(&format!("ROLLBACK TO SAVEPOINT {}", name))
                .await
            {
                warn!("ROLLBACK TO SAVEPOINT {} failed: {}", name, rollback_err);
            }
            Err(err)
        }
    }
}
