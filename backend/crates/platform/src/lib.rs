//! Platform Crate - Technical Infrastructure
//!
//! - Cryptographic utilities (HMAC-SHA256, Base64, signed tokens)
//! - Password policy and hashing (Argon2id)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
