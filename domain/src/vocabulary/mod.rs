//! Vocabulary ingestion, deduplication and the in-memory lookup used for
//! substitution matching.

use crate::analysis::DEFAULT_SUBSTITUTION_REASON;
use std::collections::HashMap;

pub mod category;
pub mod parser;
pub mod seed;
pub mod store;

pub use store::{DbVocabularyRepository, SyncReport, VocabularyRepository, VocabularyStore};

/// Replacement data for one case-folded original term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub suggestion: String,
    pub reason: String,
    pub category: Option<String>,
}

/// Immutable map from case-folded original term to its replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyLookup {
    entries: HashMap<String, LookupEntry>,
}

impl VocabularyLookup {
    /// Builds a lookup keeping the first entry seen for each case-folded
    /// original. Blank reasons are replaced by the default reason.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, LookupEntry)>,
    {
        let mut map = HashMap::new();
        for (original, mut entry) in entries {
            let key = original.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if entry.reason.trim().is_empty() {
                entry.reason = DEFAULT_SUBSTITUTION_REASON.to_string();
            }
            map.entry(key).or_insert(entry);
        }
        VocabularyLookup { entries: map }
    }

    /// Looks up a term; the key is case-folded before matching.
    pub fn get(&self, original: &str) -> Option<&LookupEntry> {
        self.entries.get(&original.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
