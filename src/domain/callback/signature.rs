//! HMAC-SHA256 webhook signatures.
//!
//! The digest is always computed over the raw request body exactly as it
//! arrived. Re-serialized JSON will not verify.
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 of `payload`, or `None` when no secret is set.
pub fn sign(payload: &[u8], secret: &[u8]) -> Option<String> {
    if secret.is_empty() {
        return None;
    }
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Checks `presented` against the expected signature in constant time.
///
/// Never errors. An empty secret, a length mismatch and a digest mismatch all
/// return `false`.
pub fn verify(payload: &[u8], presented: &str, secret: &[u8]) -> bool {
    let Some(expected) = sign(payload, secret) else {
        return false;
    };
    let presented = presented.trim().to_ascii_lowercase();
    if presented.len() != expected.len() {
        return false;
    }
    expected.as_bytes().ct_eq(presented.as_bytes()).into()
}
