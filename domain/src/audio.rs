//! Resolution of a recording's audio reference to downloadable bytes.

use crate::error::Error;
use async_trait::async_trait;

/// Downloaded audio ready to hand to a transcription provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Fetches the audio behind `audio_reference`, either a path inside the
    /// recordings bucket or an absolute URL. Fails with `RecordingNotFound`
    /// when nothing is stored there.
    async fn fetch(&self, audio_reference: &str) -> Result<AudioFile, Error>;
}
