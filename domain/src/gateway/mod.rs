//! Clients for the external services the pipeline consumes.

pub mod openai;
pub mod storage;
