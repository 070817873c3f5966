//! User Name Value Object
//!
//! Display name chosen at sign-up. Not unique and not used for login.
//!
//! ## Invariants
//! - Length: 3 to 40 characters after trimming
//! - No control characters

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Name must be between 3 and 40 characters")]
    InvalidLength,

    #[error("Name contains invalid characters")]
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let name = raw.as_ref().trim();
        let len = name.chars().count();

        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&len) {
            return Err(UserNameError::InvalidLength);
        }

        if name.chars().any(char::is_control) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("Alice").unwrap().as_str(), "Alice");
        assert_eq!(UserName::new("  Bob  ").unwrap().as_str(), "Bob");
        assert!(UserName::new("Zoë").is_ok());
        assert!(UserName::new("a".repeat(40)).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(UserName::new("Al"), Err(UserNameError::InvalidLength));
        assert_eq!(UserName::new("   Al   "), Err(UserNameError::InvalidLength));
        assert_eq!(UserName::new("a".repeat(41)), Err(UserNameError::InvalidLength));
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(UserName::new("Ali\u{0}ce"), Err(UserNameError::InvalidCharacter));
    }
}
