//! Eloquence scoring pipeline and vocabulary engine.
//!
//! Re-exports the entity models from `entity_api` so consumers of the `domain`
//! crate never depend on `entity_api` or `entity` directly.
pub use entity_api::{
    analyses, recordings, scoring_path, vocabulary_category, vocabulary_entries, Id,
};

pub mod analysis;
pub mod audio;
pub mod error;
pub mod heuristic;
pub mod orchestrator;
pub mod persistence;
pub mod progress;
pub mod recording;
pub mod substitution;
pub mod vocabulary;

pub mod gateway;

#[cfg(test)]
mod test_support;
