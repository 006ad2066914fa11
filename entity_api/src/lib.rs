pub use entity::{analyses, recordings, scoring_path, vocabulary_category, vocabulary_entries, Id};

pub mod analysis;
pub mod error;
pub mod recording;
pub mod vocabulary_entry;
