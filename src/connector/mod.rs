//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat clients (OpenAI-compatible HTTP, offline echo)
//! - Chat history storage (DuckDB, in-memory)
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
