//! Validation - Field-level error collection
//!
//! Request payloads are checked by plain functions that return
//! `Result<Valid, ValidationErrors>`. Every rule is evaluated, so a single
//! response can report every bad field at once.

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

/// A single failed rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the request body
    pub field: Cow<'static, str>,
    /// User-facing message
    pub message: Cow<'static, str>,
}

/// List of field errors produced by a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a list holding exactly one error
    pub fn single(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if any error was recorded for `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for (i, err) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Collects errors while rules are checked
///
/// ## Examples
/// ```rust
/// use kernel::validation::Validator;
///
/// let mut v = Validator::new();
/// let title = v.required("title", Some("Hi".to_string()), "Title is required");
/// if let Some(title) = &title {
///     assert!(!v.length("title", title, &(5..=20), "Title must be 5-20 characters"));
/// }
/// let errors = v.into_errors();
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` when `ok` is false
    pub fn check(
        &mut self,
        field: &'static str,
        ok: bool,
        message: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        if !ok {
            self.errors.push(field, message);
        }
        self
    }

    /// Character count (not bytes) must fall inside `range`
    ///
    /// Returns whether it did.
    pub fn length(
        &mut self,
        field: &'static str,
        value: &str,
        range: &RangeInclusive<usize>,
        message: impl Into<Cow<'static, str>>,
    ) -> bool {
        let ok = range.contains(&value.chars().count());
        self.check(field, ok, message);
        ok
    }

    /// Pass through a present value, or record `message` and yield `None`
    pub fn required<T>(
        &mut self,
        field: &'static str,
        value: Option<T>,
        message: impl Into<Cow<'static, str>>,
    ) -> Option<T> {
        if value.is_none() {
            self.errors.push(field, message);
        }
        value
    }

    /// Record a rule failure produced elsewhere (e.g. a value object)
    pub fn push(&mut self, field: &'static str, message: impl Into<Cow<'static, str>>) {
        self.errors.push(field, message);
    }

    /// String member of a JSON object
    ///
    /// Absent, `null` and non-string values record `message`.
    pub fn string_field(
        &mut self,
        payload: &Value,
        field: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Option<String> {
        let value = payload.get(field).and_then(Value::as_str).map(str::to_owned);
        self.required(field, value, message)
    }

    /// Boolean member of a JSON object
    pub fn bool_field(
        &mut self,
        payload: &Value,
        field: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Option<bool> {
        let value = payload.get(field).and_then(Value::as_bool);
        self.required(field, value, message)
    }

    /// Integer member of a JSON object; fractional numbers are rejected
    pub fn int_field(
        &mut self,
        payload: &Value,
        field: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Option<i64> {
        let value = payload.get(field).and_then(Value::as_i64);
        self.required(field, value, message)
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars() {
        let mut v = Validator::new();
        assert!(v.length("name", "ééé", &(3..=3), "bad"));
        assert!(!v.length("name", "ab", &(3..=40), "Name must be 3-40 characters"));

        let errors = v.into_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_required_records_missing() {
        let mut v = Validator::new();
        let present = v.required("a", Some(1), "a is required");
        let missing: Option<i32> = v.required("b", None, "b is required");
        assert_eq!(present, Some(1));
        assert!(missing.is_none());

        let errors = v.into_errors();
        assert!(!errors.has_field("a"));
        assert!(errors.has_field("b"));
    }

    #[test]
    fn test_collects_all_failures() {
        let mut v = Validator::new();
        v.check("title", false, "bad title")
            .check("content", false, "bad content")
            .check("active", true, "never");
        let errors = v.into_errors();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_json_fields() {
        let payload = serde_json::json!({
            "title": "Hello",
            "active": "yes",
            "id": 3,
            "ratio": 1.5,
        });

        let mut v = Validator::new();
        assert_eq!(
            v.string_field(&payload, "title", "Title is required"),
            Some("Hello".to_string())
        );
        assert_eq!(v.int_field(&payload, "id", "Id is required"), Some(3));

        assert_eq!(v.bool_field(&payload, "active", "Active must be a boolean"), None);
        assert_eq!(v.string_field(&payload, "content", "Content is required"), None);
        assert_eq!(v.int_field(&payload, "ratio", "Ratio must be an integer"), None);

        let errors = v.into_errors();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("active"));
        assert!(errors.has_field("content"));
        assert!(errors.has_field("ratio"));
    }

    #[test]
    fn test_json_fields_on_non_object() {
        let mut v = Validator::new();
        assert_eq!(v.string_field(&serde_json::json!([1, 2]), "email", "Email is required"), None);
        assert_eq!(v.string_field(&Value::Null, "password", "Password is required"), None);
        assert_eq!(v.into_errors().len(), 2);
    }

    #[test]
    fn test_display_and_serialize() {
        let errors = ValidationErrors::single("email", "Invalid email format");
        assert_eq!(
            errors.to_string(),
            "Validation failed: email: Invalid email format"
        );

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["field"], "email");
        assert_eq!(json[0]["message"], "Invalid email format");
    }
}
