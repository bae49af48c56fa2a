//! User repository
//!
//! `begin` hands out the transaction wrapper; `create_user` validates the
//! record and issues exactly one insert. Batch creation is the caller
//! looping inside a single transaction.
//!
//! Expected table (managed outside this crate):
//!
//! ```sql
//! CREATE TABLE user_info (
//!     user_name  text NOT NULL,
//!     created_at timestamptz NOT NULL DEFAULT now()
//! );
//! ```

use sqlx::PgPool;
use thiserror::Error;

use super::error::DbError;
use super::store::{ExecResult, PgTxWriter, TxWriter};
use super::tx::UserTx;
use crate::models::{UserInfo, ValidationError};

/// The single statement the write path issues.
const INSERT_USER: &str = "INSERT INTO user_info (user_name) VALUES ($1)";

/// Create-user failure: bad input or store trouble.
#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Start a unit of work.
    ///
    /// A closed or unreachable handle yields [`DbError::Begin`], never a
    /// transaction.
    pub async fn begin(&self) -> Result<UserTx<PgTxWriter>, DbError> {
        let tx = self.pool.begin().await.map_err(DbError::Begin)?;
        Ok(UserTx::new(PgTxWriter::new(tx)))
    }
}

impl<S: TxWriter> UserTx<S> {
    /// Insert one user record within this transaction.
    ///
    /// Validation runs first; an invalid record never reaches the store.
    /// The statement itself can still fail, which surfaces as
    /// [`CreateUserError::Store`] and leaves the transaction active so the
    /// caller decides whether to roll back.
    pub async fn create_user(&mut self, user: &UserInfo) -> Result<ExecResult, CreateUserError> {
        user.validate()?;

        let writer = self.writer_mut()?;
        let result = writer.exec(INSERT_USER, &[user.user_name.as_str()]).await?;
        Ok(result)
    }
}
