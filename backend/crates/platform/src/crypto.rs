//! Cryptographic Utilities
//!
//! Session tokens are signed as `payload.<base64url(HMAC-SHA256)>`.

use base64::{Engine, engine::general_purpose};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a random 32-byte key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

fn keyed_mac(key: &[u8], payload: &str) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(key)?;
    mac.update(payload.as_bytes());
    Ok(mac)
}

/// Sign `payload` as `payload.<base64url(HMAC-SHA256)>`
///
/// `payload` must not contain `.`.
pub fn sign_token(key: &[u8], payload: &str) -> Result<String, InvalidLength> {
    let signature = keyed_mac(key, payload)?.finalize().into_bytes();
    Ok(format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a token produced by [`sign_token`] and return its payload
///
/// The signature check is constant-time.
pub fn verify_token<'a>(key: &[u8], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    keyed_mac(key, payload)
        .ok()?
        .verify_slice(&signature)
        .ok()
        .map(|()| payload)
}
