//! Core domain entities.
//!
//! - [`UrlRecord`] - A short code and the original URL it resolves to

pub mod url_record;

pub use url_record::UrlRecord;
