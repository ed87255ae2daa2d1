//! URL well-formedness checks.
//!
//! Only structure is verified: the input must parse as an absolute URL with a
//! scheme and a non-empty host. The URL is not rewritten, so the stored
//! original is byte-for-byte what the caller sent.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL must not contain whitespace or control characters")]
    ForbiddenCharacter,
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty or blank string.
/// Returns [`UrlValidationError::ForbiddenCharacter`] if the string contains
/// whitespace or control characters. The parser would drop tabs and line
/// breaks, so the stored original could never be sent as a `Location` header.
/// Returns [`UrlValidationError::InvalidFormat`] if the string does not parse
/// as an absolute URL.
/// Returns [`UrlValidationError::MissingHost`] for URLs without a host, such
/// as `mailto:` or `file:///` URLs.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("not a url").is_err());
/// assert!(validate_url("mailto:user@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UrlValidationError::ForbiddenCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
