//! # Domain Layer
//!
//! Chat records, request shapes, service configuration and errors.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
