//! Domain models with validation before store access
//!
//! User input is checked against the store's rules before any statement
//! runs. Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::UserInfo;
pub use validation::ValidationError;
