//! Transcription provider trait.

use crate::types::transcription::{Config, Transcription};
use crate::Error;
use async_trait::async_trait;

/// Abstraction for speech-to-text transcription services.
///
/// Implementations turn raw audio bytes into plain UTF-8 text. Calls are
/// blocking network round trips; callers wrap them in their own timeout.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe the audio carried by `config`.
    ///
    /// Fails on network errors, unsupported formats and empty audio. An empty
    /// transcript is reported as `Error::InvalidResponse`, never as `Ok`.
    async fn transcribe(&self, config: Config) -> std::result::Result<Transcription, Error>;

    /// Return unique identifier for this provider (e.g., "openai", "whisper_local").
    ///
    /// Used for logging and provider selection.
    fn provider_id(&self) -> &str;
}
