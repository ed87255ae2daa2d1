//! Short code derivation.
//!
//! Codes are content-derived: the SHA-256 digest of the hash input is encoded
//! as URL-safe base64 without padding and truncated to [`CODE_LENGTH`]
//! characters. The same input always yields the same code.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Number of characters in a short code.
pub const CODE_LENGTH: usize = 7;

/// Derives a candidate short code from `input`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(derive_code("https://example.com"), "EAaArVR");
/// assert_eq!(derive_code("https://example.com").len(), CODE_LENGTH);
/// ```
pub fn derive_code(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut code = URL_SAFE_NO_PAD.encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Builds a fresh hash input for `original` by appending a random nonce.
///
/// Used after a collision so the next candidate code differs from the taken one.
pub fn perturb(original: &str) -> String {
    format!("{original}#{:016x}", rand::random::<u64>())
}
