//! Repository implementations.
//!
//! - [`InMemoryUrlRepository`] - Volatile, process-local URL storage

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
