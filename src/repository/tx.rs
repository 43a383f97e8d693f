//! Transaction guard for repository operations.
//!
//! Every store operation is one unit of work: `begin` opens the transaction,
//! the operation runs its statements through [`TxGuard::conn`], and a single
//! call to [`TxGuard::finish`] either commits (on `Ok`) or rolls back (on
//! `Err`). A failed rollback after a failing statement surfaces as
//! [`AppError::FatalGuard`] rather than being swallowed: the session is in an
//! unknown state at that point.
//!
//! If the operation's future is cancelled before `finish` runs, the inner
//! transaction is dropped and the driver rolls it back, so no transaction
//! outlives its operation.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::error::{AppError, AppResult};

/// Scoped commit-or-rollback wrapper around one `sqlx` transaction.
pub struct TxGuard {
    tx: Transaction<'static, Postgres>,
    op: &'static str,
}

impl TxGuard {
    /// Open a transaction for the named operation.
    pub async fn begin(pool: &PgPool, op: &'static str) -> AppResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx, op })
    }

    /// Executor for statements belonging to this unit of work. Statements
    /// must run through this handle so the transaction actually scopes them.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Terminate the transaction exactly once: commit if the operation
    /// completed normally, roll back if it is unwinding with an error.
    pub async fn finish<T>(self, outcome: AppResult<T>) -> AppResult<T> {
        match outcome {
            Ok(value) => {
                self.tx.commit().await?;
                Ok(value)
            }
            Err(err) => match self.tx.rollback().await {
                Ok(()) => Err(err),
                Err(rollback_err) => {
                    tracing::error!(
                        "Rollback failed during {} (original error: {})",
                        self.op,
                        err
                    );
                    Err(AppError::FatalGuard {
                        op: self.op,
                        source: rollback_err,
                    })
                }
            },
        }
    }
}
