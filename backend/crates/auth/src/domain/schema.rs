//! Request Schemas
//!
//! Login and sign-up payloads are validated here, field by field. Every
//! failing field contributes one message.

use kernel::validation::{ValidationErrors, Validator};
use serde_json::Value;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::RawPassword,
};

/// Validated login payload
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: RawPassword,
}

/// Validated sign-up payload
#[derive(Debug)]
pub struct SignUpInput {
    pub name: UserName,
    pub email: Email,
    pub password: RawPassword,
}

/// `{ email, password }`
pub fn validate_login(payload: &Value) -> Result<LoginInput, ValidationErrors> {
    let mut v = Validator::new();

    let email = email_field(&mut v, payload);
    let password = password_field(&mut v, payload);

    match (email, password) {
        (Some(email), Some(password)) => Ok(LoginInput { email, password }),
        _ => Err(v.into_errors()),
    }
}

/// `{ name, email, password }`
pub fn validate_sign_up(payload: &Value) -> Result<SignUpInput, ValidationErrors> {
    let mut v = Validator::new();

    let name = v
        .string_field(payload, "name", "Name is required")
        .and_then(|raw| match UserName::new(raw) {
            Ok(name) => Some(name),
            Err(e) => {
                v.push("name", e.to_string());
                None
            }
        });
    let email = email_field(&mut v, payload);
    let password = password_field(&mut v, payload);

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) => Ok(SignUpInput {
            name,
            email,
            password,
        }),
        _ => Err(v.into_errors()),
    }
}

fn email_field(v: &mut Validator, payload: &Value) -> Option<Email> {
    let raw = v.string_field(payload, "email", "Email is required")?;
    match Email::new(raw) {
        Ok(email) => Some(email),
        Err(e) => {
            v.push("email", e.to_string());
            None
        }
    }
}

fn password_field(v: &mut Validator, payload: &Value) -> Option<RawPassword> {
    let raw = v.string_field(payload, "password", "Password is required")?;
    match RawPassword::new(raw) {
        Ok(password) => Some(password),
        Err(e) => {
            v.push("password", e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_valid() {
        let input = validate_login(&json!({
            "email": "Alice@X.com",
            "password": "Abcdef1!",
        }))
        .unwrap();
        assert_eq!(input.email.as_str(), "alice@x.com");
    }

    #[test]
    fn test_login_reports_every_field() {
        let errors = validate_login(&json!({
            "email": "not-an-email",
            "password": "abc",
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("email"));
        assert!(errors.has_field("password"));
    }

    #[test]
    fn test_login_missing_and_wrong_types() {
        let errors = validate_login(&json!({ "email": 42 })).unwrap_err();
        assert!(errors.has_field("email"));
        assert!(errors.has_field("password"));

        let errors = validate_login(&json!("just a string")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_sign_up_valid() {
        let input = validate_sign_up(&json!({
            "name": "Alice",
            "email": "alice@x.com",
            "password": "Abcdef1!",
        }))
        .unwrap();
        assert_eq!(input.name.as_str(), "Alice");
    }

    #[test]
    fn test_sign_up_invalid_name_and_password() {
        let errors = validate_sign_up(&json!({
            "name": "Al",
            "email": "alice@x.com",
            "password": "abcdefgh",
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("password"));
        assert!(!errors.has_field("email"));
    }

    #[test]
    fn test_sign_up_accepts_long_password() {
        let password = format!("Abcdef1!{}", "a".repeat(125));
        let input = validate_sign_up(&json!({
            "name": "Alice",
            "email": "alice@x.com",
            "password": password,
        }))
        .unwrap();
        assert_eq!(input.email.as_str(), "alice@x.com");

        assert!(validate_login(&json!({
            "email": "alice@x.com",
            "password": password,
        }))
        .is_ok());
    }

    #[test]
    fn test_sign_up_missing_name() {
        let errors = validate_sign_up(&json!({
            "email": "alice@x.com",
            "password": "Abcdef1!",
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("name"));
    }
}
