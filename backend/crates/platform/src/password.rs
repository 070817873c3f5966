//! Password Policy, Hashing and Verification
//!
//! - Strength policy: length plus character-class requirements
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of clear text on drop
//!
//! ## Policy
//! A password is accepted when it
//! - is at least [`MIN_PASSWORD_LENGTH`] characters long
//! - contains a lowercase letter, an uppercase letter and a digit
//! - contains at least one of [`REQUIRED_SPECIAL_CHARS`]
//! - uses only ASCII letters, digits and [`ALLOWED_SPECIAL_CHARS`]

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// At least one of these must appear
pub const REQUIRED_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Every non-alphanumeric character must come from this set
pub const ALLOWED_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '#', '&', '^'];

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain one of @$!%*?&")]
    MissingSpecial,

    #[error("Password may only contain letters, digits and @$!%*?#&^")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Check `raw` against the strength policy
///
/// Reports the first violated rule, in the order listed in the module docs.
///
/// ## Examples
/// ```rust
/// use platform::password::check_strength;
///
/// assert!(check_strength("Abcdef1!").is_ok());
/// assert!(check_strength("abc").is_err());
/// ```
pub fn check_strength(raw: &str) -> Result<(), PasswordPolicyError> {
    let char_count = raw.chars().count();

    if char_count < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: char_count,
        });
    }

    if !raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c))
    {
        return Err(PasswordPolicyError::InvalidCharacter);
    }

    if !raw.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }
    if !raw.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }
    if !raw.chars().any(|c| REQUIRED_SPECIAL_CHARS.contains(&c)) {
        return Err(PasswordPolicyError::MissingSpecial);
    }

    Ok(())
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password, enforcing [`check_strength`]
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        check_strength(&raw)?;
        Ok(Self(raw))
    }

    /// Wrap without policy checks (verification path; the stored hash decides)
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = peppered(self.as_bytes(), pepper);

        // 128-bit random salt
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Abcdef1!".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares in constant time. A malformed stored hash verifies
    /// as `false`.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = peppered(password.as_bytes(), pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut combined = password.to_vec();
    if let Some(p) = pepper {
        combined.extend_from_slice(p);
    }
    combined
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_strong_password() {
        assert!(check_strength("Abcdef1!").is_ok());
        assert!(check_strength("MySecure#Pass2024!").is_ok());
        assert!(check_strength("Zz9&Zz9&Zz9&").is_ok());
    }

    #[test]
    fn test_policy_rejects_short() {
        assert_eq!(
            check_strength("abc"),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 3 })
        );
        assert!(matches!(
            check_strength("Ab1!"),
            Err(PasswordPolicyError::TooShort { .. })
        ));
    }

    #[test]
    fn test_policy_has_no_upper_length_bound() {
        let long = format!("Abcdef1!{}", "a".repeat(125));
        assert_eq!(long.len(), 133);
        assert!(check_strength(&long).is_ok());
        assert!(check_strength(&format!("Aa1!{}", "x".repeat(1000))).is_ok());
    }

    #[test]
    fn test_policy_character_classes() {
        assert_eq!(
            check_strength("ABCDEF1!"),
            Err(PasswordPolicyError::MissingLowercase)
        );
        assert_eq!(
            check_strength("abcdef1!"),
            Err(PasswordPolicyError::MissingUppercase)
        );
        assert_eq!(
            check_strength("Abcdefg!"),
            Err(PasswordPolicyError::MissingDigit)
        );
        assert_eq!(
            check_strength("Abcdefg1"),
            Err(PasswordPolicyError::MissingSpecial)
        );
    }

    #[test]
    fn test_policy_hash_and_caret_allowed_but_not_sufficient() {
        // '#' and '^' may appear but don't satisfy the special-char rule
        assert_eq!(
            check_strength("Abcdef1#^"),
            Err(PasswordPolicyError::MissingSpecial)
        );
        assert!(check_strength("Abcdef1#^!").is_ok());
    }

    #[test]
    fn test_policy_rejects_other_characters() {
        assert_eq!(
            check_strength("Abc def1!"),
            Err(PasswordPolicyError::InvalidCharacter)
        );
        assert_eq!(
            check_strength("Abcdéf1!"),
            Err(PasswordPolicyError::InvalidCharacter)
        );
        assert_eq!(
            check_strength("Abcdef1!-"),
            Err(PasswordPolicyError::InvalidCharacter)
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
