//! Database layer - connection handling, store seams, and the user
//! repository
//!
//! # Design Principles
//!
//! - The pool is the connection handle; open once, close at exit
//! - Validation runs before store access, always
//! - One transaction per unit of work, finalized exactly once

pub mod error;
pub mod pool;
pub mod store;
pub mod tx;
pub mod users;

pub use error::DbError;
pub use pool::{connect, connect_lazy, connect_with_options};
pub use store::{ExecResult, PgTxWriter, ScalarReader, TxWriter};
pub use tx::{TxState, UserTx};
pub use users::{CreateUserError, UserRepo};
