use uuid::Uuid;

// Speech analysis entities
pub mod analyses;
pub mod recordings;
pub mod scoring_path;

// Vocabulary entities
pub mod vocabulary_category;
pub mod vocabulary_entries;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
