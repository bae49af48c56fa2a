//! Store error taxonomy
//!
//! One variant per failing operation, so callers can tell a refused
//! connection from a failed commit without string matching.

use thiserror::Error;

use super::tx::TxState;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection string rejected or the store is unreachable
    #[error("connect failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A transaction could not be started
    #[error("begin failed: {0}")]
    Begin(#[source] sqlx::Error),

    /// The store rejected the commit
    #[error("commit failed: {0}")]
    Commit(#[source] sqlx::Error),

    /// The store rejected the rollback
    #[error("rollback failed: {0}")]
    Rollback(#[source] sqlx::Error),

    /// Statement execution failed
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// No row to read, or the row would not decode
    #[error("scan failed: {0}")]
    Scan(#[source] sqlx::Error),

    /// Operation on a transaction that already reached a terminal state
    #[error("transaction already {0}")]
    Finalized(TxState),
}
