//! Grammatical category inference for user-submitted vocabulary entries.

use crate::vocabulary_category::VocabularyCategory;

const CONNECTORS: [&str; 18] = [
    "et", "mais", "donc", "or", "ni", "car", "puis", "ensuite", "alors", "ainsi", "aussi",
    "enfin", "cependant", "pourtant", "toutefois", "néanmoins", "également", "d'ailleurs",
];

const ADJECTIVE_SUFFIXES: [&str; 8] = ["if", "ive", "eux", "euse", "able", "ible", "al", "ale"];
const VERB_SUFFIXES: [&str; 3] = ["er", "ir", "re"];

/// Guesses the category of `original` from its shape, defaulting to noun.
///
/// Rules are checked in order: several words make an expression, then known
/// connectors, then the `-ment` adverb suffix, verb infinitive endings and
/// common adjective endings.
pub fn infer(original: &str) -> VocabularyCategory {
    let term = original.trim().to_lowercase();

    if term.split_whitespace().count() > 1 {
        return VocabularyCategory::Expression;
    }
    if CONNECTORS.contains(&term.as_str()) {
        return VocabularyCategory::Connector;
    }
    if term.ends_with("ment") {
        return VocabularyCategory::Adverb;
    }
    if VERB_SUFFIXES.iter().any(|suffix| term.ends_with(suffix)) {
        return VocabularyCategory::Verb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|suffix| term.ends_with(suffix)) {
        return VocabularyCategory::Adjective;
    }

    VocabularyCategory::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_terms_are_expressions() {
        assert_eq!(infer("en fait"), VocabularyCategory::Expression);
        assert_eq!(infer("parce que"), VocabularyCategory::Expression);
    }

    #[test]
    fn connectors_take_precedence_over_suffixes() {
        assert_eq!(infer("Également"), VocabularyCategory::Connector);
        assert_eq!(infer("mais"), VocabularyCategory::Connector);
    }

    #[test]
    fn suffixes_drive_the_remaining_categories() {
        assert_eq!(infer("vraiment"), VocabularyCategory::Adverb);
        assert_eq!(infer("faire"), VocabularyCategory::Verb);
        assert_eq!(infer("finir"), VocabularyCategory::Verb);
        assert_eq!(infer("parler"), VocabularyCategory::Verb);
        assert_eq!(infer("créatif"), VocabularyCategory::Adjective);
        assert_eq!(infer("sérieux"), VocabularyCategory::Adjective);
        assert_eq!(infer("capable"), VocabularyCategory::Adjective);
    }

    #[test]
    fn unknown_shapes_default_to_noun() {
        assert_eq!(infer("truc"), VocabularyCategory::Noun);
        assert_eq!(infer("chose"), VocabularyCategory::Noun);
    }
}
