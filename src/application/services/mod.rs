mod llm_service;

pub use llm_service::*;
