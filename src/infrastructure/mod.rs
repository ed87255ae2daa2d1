//! Infrastructure layer implementing the storage contracts of the domain layer.
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
