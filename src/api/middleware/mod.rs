//! HTTP middleware for request processing.
//!
//! Provides gzip compression and observability middleware.

pub mod compression;
pub mod tracing;
