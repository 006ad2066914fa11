//! Speech AI abstraction layer for transcription and eloquence analysis providers.
//!
//! This crate provides trait-based abstractions for the two external
//! capabilities the scoring pipeline consumes:
//! - Speech-to-text transcription of recorded audio
//! - Language-model scoring of a transcript
//!
//! The design is provider-agnostic, so the pipeline can swap vendors (OpenAI,
//! a local Whisper server, a test double) without changing orchestration code.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::analysis::{EloquenceReport, ReportedSubstitution};
