//! Common ID Types
//!
//! Type-safe ID wrappers for database-assigned integer keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// IDs are always strictly positive. Zero and negative values are rejected
/// at every construction point, so an `Id<T>` in hand is always a valid key.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::new(7).unwrap();
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a raw value, rejecting anything `<= 0`
    pub fn new(value: i32) -> Option<Self> {
        (value > 0).then_some(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Parse from user input (query string, path segment)
    ///
    /// Returns `None` for non-numeric input and for values `<= 0`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i32>().ok().and_then(Self::new)
    }

    /// Create from a database value (assumed already valid)
    pub fn from_db(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub fn value(&self) -> i32 {
        self.value
    }
}

// Manual impls so that `T` (a marker) doesn't need to implement anything.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("id must be greater than 0"))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Post IDs
    pub struct Post;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_rejects_non_positive() {
        assert!(UserId::new(0).is_none());
        assert!(UserId::new(-3).is_none());
        assert_eq!(UserId::new(1).map(|id| id.value()), Some(1));
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(PostId::parse("42").map(|id| id.value()), Some(42));
        assert_eq!(PostId::parse(" 8 ").map(|id| id.value()), Some(8));
        assert!(PostId::parse("0").is_none());
        assert!(PostId::parse("-1").is_none());
        assert!(PostId::parse("abc").is_none());
        assert!(PostId::parse("").is_none());
        assert!(PostId::parse("1.5").is_none());
    }

    #[test]
    fn test_id_serde() {
        let id = PostId::new(5).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        let parsed: PostId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.value(), 12);

        assert!(serde_json::from_str::<PostId>("0").is_err());
    }
}
