//! Matches transcript words against the vocabulary lookup.

use crate::analysis::Substitution;
use crate::vocabulary::VocabularyLookup;
use std::collections::HashSet;

/// Produces one substitution per distinct transcript word that has a
/// vocabulary entry, in order of first appearance.
///
/// Matching is exact on case-folded whole words; substrings never match.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstitutionMatcher;

impl SubstitutionMatcher {
    pub fn new() -> Self {
        SubstitutionMatcher
    }

    pub fn find(&self, transcript: &str, lookup: &VocabularyLookup) -> Vec<Substitution> {
        let mut seen = HashSet::new();
        let mut substitutions = Vec::new();

        for word in words(transcript) {
            if !seen.insert(word.clone()) {
                continue;
            }
            if let Some(entry) = lookup.get(&word) {
                substitutions.push(Substitution {
                    original: word,
                    suggestion: entry.suggestion.clone(),
                    reason: entry.reason.clone(),
                    category: entry.category.clone(),
                });
            }
        }

        substitutions
    }
}

/// Case-folded runs of alphanumeric characters, so punctuation, apostrophes
/// and hyphens all act as word boundaries. Vocabulary originals holding
/// several words stay stored but are never matched.
fn words(transcript: &str) -> impl Iterator<Item = String> + '_ {
    transcript
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
}
