//! # Application Layer
//!
//! The chat service, its collaborator interfaces, and the use cases that
//! coordinate the service with chat history storage.

pub mod interfaces;
pub mod services;
pub mod use_cases;

pub use interfaces::*;
pub use services::*;
pub use use_cases::*;
