use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Grammatical category of a vocabulary entry.
///
/// Stored as its label in `vocabulary_entries.category`, which also accepts
/// free-form labels supplied when syncing a file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyCategory {
    Adjective,
    Adverb,
    Verb,
    #[default]
    Noun,
    Expression,
    Connector,
}

impl VocabularyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyCategory::Adjective => "adjective",
            VocabularyCategory::Adverb => "adverb",
            VocabularyCategory::Verb => "verb",
            VocabularyCategory::Noun => "noun",
            VocabularyCategory::Expression => "expression",
            VocabularyCategory::Connector => "connector",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct VocabularyCategoryParseError;

impl FromStr for VocabularyCategory {
    type Err = VocabularyCategoryParseError;

    // Accepts the French labels used by existing vocabulary files as well.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "adjective" | "adjectif" => Ok(VocabularyCategory::Adjective),
            "adverb" | "adverbe" => Ok(VocabularyCategory::Adverb),
            "verb" | "verbe" => Ok(VocabularyCategory::Verb),
            "noun" | "nom" => Ok(VocabularyCategory::Noun),
            "expression" => Ok(VocabularyCategory::Expression),
            "connector" | "connecteur" => Ok(VocabularyCategory::Connector),
            _ => Err(VocabularyCategoryParseError),
        }
    }
}

impl fmt::Display for VocabularyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
