//! Helper functions used by the shortening service.
//!
//! - [`code_generator`] - Short code derivation from URL hashes
//! - [`url_validator`] - URL well-formedness checks

pub mod code_generator;
pub mod url_validator;
