//! Types for transcription operations.

use serde::{Deserialize, Serialize};

/// Audio to transcribe plus the hints a provider needs to decode it.
#[derive(Debug, Clone)]
pub struct Config {
    pub audio: Vec<u8>,
    /// File name sent to the provider; its extension tells it the container format.
    pub file_name: String,
    /// ISO 639-1 language hint, e.g. "fr".
    pub language_code: Option<String>,
}

/// Result of a transcription call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub language_code: Option<String>,
    pub duration_seconds: Option<f64>,
}
