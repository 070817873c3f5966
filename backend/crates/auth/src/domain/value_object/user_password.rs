//! User Password Value Object
//!
//! Domain wrappers around `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("Abcdef1!".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the strength policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    /// Wrap a candidate for verification only
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::new_unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, stored)
// ============================================================================

/// Argon2id hash as stored in `users.password_hash`
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Restore from a PHC string read from the database
    pub fn from_db(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc).map(Self)
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_enforced_on_new() {
        assert!(RawPassword::new("abc".to_string()).is_err());
        assert!(RawPassword::new("Abcdef1!".to_string()).is_ok());
    }

    #[test]
    fn test_hash_verify_and_restore() {
        let raw = RawPassword::new("Abcdef1!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));
        assert!(!hashed.verify(&RawPassword::candidate("Abcdef1?".to_string()), None));

        let restored = UserPassword::from_db(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_candidate_skips_policy() {
        // weak candidates still verify to false instead of erroring
        let hashed =
            UserPassword::from_raw(&RawPassword::new("Abcdef1!".to_string()).unwrap(), None)
                .unwrap();
        assert!(!hashed.verify(&RawPassword::candidate("x".to_string()), None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::candidate("secret".to_string());
        assert!(!format!("{:?}", raw).contains("secret"));
    }
}
