//! Transaction wrapper with tagged state
//!
//! [`UserTx`] owns one in-progress unit of work and records how it ended.
//! Terminal states are reached exactly once; any later call reports
//! [`DbError::Finalized`] with the state the transaction is in.

use std::fmt;

use super::error::DbError;
use super::store::TxWriter;

/// Lifecycle of a transaction handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxState {
    Active,
    Committed,
    RolledBack,
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Committed => write!(f, "committed"),
            Self::RolledBack => write!(f, "rolled back"),
        }
    }
}

/// One in-progress unit of work against the user store.
///
/// Obtained from [`UserRepo::begin`]; generic over the writer so tests can
/// substitute a recording stub. The writer keeps its pooled connection
/// alive until the transaction is finalized.
///
/// [`UserRepo::begin`]: crate::db::users::UserRepo::begin
#[must_use = "if unused, the transaction is immediately rolled back"]
pub struct UserTx<S> {
    writer: Option<S>,
    state: TxState,
}

impl<S: TxWriter> UserTx<S> {
    /// Wrap an already-begun writer.
    ///
    /// [`UserRepo::begin`] is the Postgres-backed path; calling this
    /// directly is for writer stubs.
    ///
    /// [`UserRepo::begin`]: crate::db::users::UserRepo::begin
    pub fn new(writer: S) -> Self {
        Self {
            writer: Some(writer),
            state: TxState::Active,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TxState {
        self.state
    }

    /// Finalize the unit of work: `Active` -> `Committed`.
    ///
    /// A commit the store rejects leaves nothing persisted, so the state
    /// moves to `RolledBack` and the error reports as [`DbError::Commit`].
    pub async fn commit(&mut self) -> Result<(), DbError> {
        let writer = self.take_writer()?;
        match writer.commit().await {
            Ok(()) => {
                self.state = TxState::Committed;
                Ok(())
            }
            Err(e) => {
                self.state = TxState::RolledBack;
                Err(e)
            }
        }
    }

    /// Discard the unit of work: `Active` -> `RolledBack`.
    pub async fn rollback(&mut self) -> Result<(), DbError> {
        let writer = self.take_writer()?;
        let result = writer.rollback().await;
        self.state = TxState::RolledBack;
        result
    }

    /// Borrow the writer for statement execution.
    pub(crate) fn writer_mut(&mut self) -> Result<&mut S, DbError> {
        match self.writer.as_mut() {
            Some(writer) => Ok(writer),
            None => Err(DbError::Finalized(self.state)),
        }
    }

    fn take_writer(&mut self) -> Result<S, DbError> {
        self.writer.take().ok_or(DbError::Finalized(self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_display_matches_error_text() {
        assert_eq!(TxState::Active.to_string(), "active");
        assert_eq!(TxState::Committed.to_string(), "committed");
        assert_eq!(TxState::RolledBack.to_string(), "rolled back");
    }
}
