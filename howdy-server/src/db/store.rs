//! Store access seams
//!
//! Two narrow surfaces cover everything the crate does with the store:
//! handlers read one scalar, the transaction path runs parameterized
//! writes. Postgres implementations live here; tests substitute stubs.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::error::DbError;

/// Outcome of a write statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows the statement touched
    pub rows_affected: u64,
}

/// One-row, one-column reads decoded to text.
#[async_trait]
pub trait ScalarReader: Send + Sync {
    /// Run `sql` and decode the single column of its single row.
    ///
    /// A query that returns no row is a scan failure: the missing row only
    /// shows up when the result is read.
    async fn read_scalar(&self, sql: &str) -> Result<String, DbError>;
}

#[async_trait]
impl ScalarReader for PgPool {
    async fn read_scalar(&self, sql: &str) -> Result<String, DbError> {
        sqlx::query_scalar(sql)
            .fetch_one(self)
            .await
            .map_err(classify_read_error)
    }
}

/// Write surface of one in-progress transaction: parameterized execute
/// plus the two ways out.
#[async_trait]
pub trait TxWriter: Send {
    /// Run one statement; text arguments bind positionally.
    async fn exec(&mut self, sql: &str, args: &[&str]) -> Result<ExecResult, DbError>;

    /// Make the work permanent.
    async fn commit(self) -> Result<(), DbError>;

    /// Discard the work.
    async fn rollback(self) -> Result<(), DbError>;
}

/// Postgres-backed writer over one driver transaction.
pub struct PgTxWriter {
    tx: Transaction<'static, Postgres>,
}

impl PgTxWriter {
    pub(crate) fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl TxWriter for PgTxWriter {
    async fn exec(&mut self, sql: &str, args: &[&str]) -> Result<ExecResult, DbError> {
        let mut query = sqlx::query(sql);
        for arg in args {
            query = query.bind(arg.to_string());
        }

        let done = query
            .execute(&mut *self.tx)
            .await
            .map_err(DbError::Query)?;

        Ok(ExecResult {
            rows_affected: done.rows_affected(),
        })
    }

    async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await.map_err(DbError::Commit)
    }

    async fn rollback(self) -> Result<(), DbError> {
        self.tx.rollback().await.map_err(DbError::Rollback)
    }
}

/// Split driver errors from a read into the scan class (missing or
/// undecodable row) and the query class (everything else).
fn classify_read_error(e: sqlx::Error) -> DbError {
    let is_scan = matches!(
        e,
        sqlx::Error::RowNotFound
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. }
    );

    if is_scan {
        DbError::Scan(e)
    } else {
        DbError::Query(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_classifies_as_scan() {
        let err = classify_read_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Scan(_)));
    }

    #[test]
    fn decode_failure_classifies_as_scan() {
        let err = classify_read_error(sqlx::Error::Decode("bad column".into()));
        assert!(matches!(err, DbError::Scan(_)));
    }

    #[test]
    fn transport_failure_classifies_as_query() {
        let err = classify_read_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, DbError::Query(_)));
    }

    #[tokio::test]
    async fn closed_lazy_pool_read_fails() {
        let pool = super::super::pool::connect_lazy("postgres://localhost:5432/howdy_test")
            .expect("lazy pool");
        pool.close().await;

        let err = pool.read_scalar("select 'x'").await.unwrap_err();
        assert!(matches!(err, DbError::Query(sqlx::Error::PoolClosed)));
    }
}
