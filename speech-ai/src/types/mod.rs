pub mod analysis;
pub mod transcription;
