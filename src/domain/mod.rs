//! Domain layer containing business entities, storage contracts and errors.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Failure conditions of the shortening core
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::DomainError;
