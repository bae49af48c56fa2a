//! User records and their rules

use super::ValidationError;

/// Maximum length for user names
const MAX_USER_NAME_LEN: usize = 128;

/// A user record as handed to the store.
///
/// Construction never fails; the rules are checked by [`UserInfo::validate`]
/// when the record is about to be written, so a bad record can be built,
/// inspected, and reported without touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user_name: String,
}

impl UserInfo {
    /// Create a user record from any string-ish name.
    ///
    /// # Example
    /// ```
    /// use howdy_server::models::UserInfo;
    ///
    /// assert!(UserInfo::new("alice").validate().is_ok());
    /// assert!(UserInfo::new("").validate().is_err());  // empty
    /// ```
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    /// Check the record against the store's rules.
    ///
    /// # Rules
    /// - `user_name` must be non-empty
    /// - Max 128 bytes
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_name.is_empty() {
            return Err(ValidationError::Empty { field: "user_name" });
        }

        if self.user_name.len() > MAX_USER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "user_name",
                max: MAX_USER_NAME_LEN,
            });
        }

        Ok(())
    }
}
