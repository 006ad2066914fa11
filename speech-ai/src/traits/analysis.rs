//! Eloquence analysis provider trait.

use crate::types::analysis::{Config, EloquenceReport};
use crate::Error;
use async_trait::async_trait;

/// Abstraction for language-model scoring of a transcript.
///
/// The returned report must already satisfy [`EloquenceReport::validate`];
/// any deviation from the expected shape is an error, not a partial success.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Score the transcript on fluidity, vocabulary, grammar and rhythm and
    /// propose vocabulary substitutions.
    async fn analyze(&self, config: Config) -> std::result::Result<EloquenceReport, Error>;

    /// Return unique identifier for this provider (e.g., "openai").
    fn provider_id(&self) -> &str;
}
