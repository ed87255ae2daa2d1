//! URL record entity: a short code paired with the URL it stands for.

/// A stored mapping from a short code to the original URL.
///
/// Records are created once by the shortener and never modified afterwards.
/// `original` keeps the URL exactly as the caller submitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub code: String,
    pub original: String,
}

impl UrlRecord {
    /// Creates a new record.
    pub fn new(code: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original: original.into(),
        }
    }
}
