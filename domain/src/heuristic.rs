//! Deterministic fallback scorer.
//!
//! Scores are a pure function of the transcript text and the number of
//! vocabulary substitutions found in it, so identical inputs always produce
//! identical scores.

use crate::analysis::{AnalysisResult, MetricScores, Substitution};
use crate::error::{Error, PipelineErrorKind};
use std::collections::HashSet;

pub const FALLBACK_FEEDBACK: &str = "Analyse automatique basée sur les métriques extraites";

const FLUIDITY_BASE: u8 = 75;
const VOCABULARY_BASE: f64 = 70.0;
const RHYTHM_BASE: f64 = 70.0;
/// No grammar checker is wired in; every transcript gets the same grammar score.
const GRAMMAR_PLACEHOLDER: u8 = 80;

/// Word and sentence counts the heuristic scores are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptStats {
    pub word_count: usize,
    pub unique_word_count: usize,
    pub sentence_count: usize,
}

impl TranscriptStats {
    /// Words are whitespace-delimited and case-folded; sentences are the
    /// non-blank fragments between `.`, `!` and `?`.
    pub fn from_transcript(transcript: &str) -> Self {
        let words: Vec<String> = transcript
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect();
        let unique_word_count = words.iter().collect::<HashSet<_>>().len();
        let sentence_count = transcript
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count();

        TranscriptStats {
            word_count: words.len(),
            unique_word_count,
            sentence_count,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        HeuristicAnalyzer
    }

    /// Computes the four sub-scores. Fails with `EmptyTranscript` when the
    /// transcript has no words.
    pub fn score(&self, transcript: &str, substitution_count: usize) -> Result<MetricScores, Error> {
        let stats = TranscriptStats::from_transcript(transcript);
        if stats.word_count == 0 {
            return Err(Error::pipeline(PipelineErrorKind::EmptyTranscript));
        }

        Ok(MetricScores {
            fluidity: fluidity_score(&stats),
            vocabulary: vocabulary_score(&stats, substitution_count),
            grammar: GRAMMAR_PLACEHOLDER,
            rhythm: rhythm_score(&stats),
        })
    }

    /// Scores the transcript and wraps the result with the fixed fallback feedback.
    pub fn analyze(
        &self,
        transcript: &str,
        substitutions: Vec<Substitution>,
    ) -> Result<AnalysisResult, Error> {
        let scores = self.score(transcript, substitutions.len())?;
        Ok(AnalysisResult {
            transcript: transcript.to_string(),
            scores,
            feedback: FALLBACK_FEEDBACK.to_string(),
            substitutions,
        })
    }
}

fn fluidity_score(stats: &TranscriptStats) -> u8 {
    if stats.sentence_count == 0 {
        return FLUIDITY_BASE;
    }
    let avg_sentence_length = stats.word_count as f64 / stats.sentence_count as f64;
    if avg_sentence_length > 5.0 && avg_sentence_length < 15.0 {
        FLUIDITY_BASE + 10
    } else if avg_sentence_length > 3.0 && avg_sentence_length < 20.0 {
        FLUIDITY_BASE + 5
    } else {
        FLUIDITY_BASE
    }
}

fn vocabulary_score(stats: &TranscriptStats, substitution_count: usize) -> u8 {
    let ratio = substitution_count as f64 / stats.word_count as f64;
    (VOCABULARY_BASE + ratio * 100.0).round().min(100.0) as u8
}

fn rhythm_score(stats: &TranscriptStats) -> u8 {
    let diversity = stats.unique_word_count as f64 / stats.word_count as f64;
    (RHYTHM_BASE + diversity * 30.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};

    // 20 words, 2 sentences, 15 distinct case-folded words.
    const TWENTY_WORDS: &str = "Un deux trois quatre cinq six sept huit neuf dix. \
        un deux trois quatre cinq onze douze treize quatorze quinze.";

    #[test]
    fn stats_count_words_unique_words_and_sentences() {
        let stats = TranscriptStats::from_transcript(TWENTY_WORDS);
        assert_eq!(
            stats,
            TranscriptStats {
                word_count: 20,
                unique_word_count: 15,
                sentence_count: 2,
            }
        );
    }

    #[test]
    fn scores_reference_transcript() {
        let scores = HeuristicAnalyzer::new().score(TWENTY_WORDS, 2).unwrap();
        assert_eq!(scores.fluidity, 85);
        assert_eq!(scores.vocabulary, 80);
        assert_eq!(scores.grammar, 80);
        assert_eq!(scores.rhythm, 93);
        assert_eq!(scores.overall(), 83);
    }

    #[test]
    fn scoring_is_deterministic() {
        let analyzer = HeuristicAnalyzer::new();
        let first = analyzer.score(TWENTY_WORDS, 3).unwrap();
        for _ in 0..10 {
            assert_eq!(analyzer.score(TWENTY_WORDS, 3).unwrap(), first);
        }
    }

    #[test]
    fn empty_transcript_is_an_error() {
        for transcript in ["", "   ", "\n\t"] {
            let err = HeuristicAnalyzer::new().score(transcript, 0).unwrap_err();
            assert_eq!(
                err.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::Pipeline(
                    PipelineErrorKind::EmptyTranscript
                ))
            );
        }
    }

    #[test]
    fn vocabulary_floors_at_seventy_and_caps_at_one_hundred() {
        let analyzer = HeuristicAnalyzer::new();
        assert_eq!(analyzer.score("bonjour à tous", 0).unwrap().vocabulary, 70);
        assert_eq!(analyzer.score("bonjour à tous", 3).unwrap().vocabulary, 100);
        assert_eq!(analyzer.score("bonjour à tous", 30).unwrap().vocabulary, 100);
    }

    #[test]
    fn fluidity_rewards_moderate_sentence_length() {
        let analyzer = HeuristicAnalyzer::new();
        // avg 2 words per sentence
        assert_eq!(analyzer.score("Oui merci. Très bien.", 0).unwrap().fluidity, 75);
        // avg 4 words per sentence
        assert_eq!(
            analyzer.score("Je suis très content. Nous partons demain matin.", 0).unwrap().fluidity,
            80
        );
        // no sentence terminators at all
        assert_eq!(analyzer.score("...", 0).unwrap().fluidity, 75);
        // 25 words in a single run-on sentence
        let run_on = vec!["mot"; 25].join(" ");
        assert_eq!(analyzer.score(&run_on, 0).unwrap().fluidity, 75);
    }

    #[test]
    fn rhythm_rewards_lexical_diversity() {
        let analyzer = HeuristicAnalyzer::new();
        assert_eq!(analyzer.score("alpha beta gamma delta", 0).unwrap().rhythm, 100);
        assert_eq!(analyzer.score("Encore encore encore encore", 0).unwrap().rhythm, 78);
    }

    #[test]
    fn all_scores_stay_in_range() {
        let analyzer = HeuristicAnalyzer::new();
        let transcripts = [
            "a",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
            "Bonjour! Comment allez-vous? Très bien, merci.",
            TWENTY_WORDS,
        ];
        for transcript in transcripts {
            for substitution_count in [0, 1, 5, 50, 500] {
                let scores = analyzer.score(transcript, substitution_count).unwrap();
                for value in [
                    scores.fluidity,
                    scores.vocabulary,
                    scores.grammar,
                    scores.rhythm,
                    scores.overall(),
                ] {
                    assert!(value <= 100);
                }
            }
        }
    }

    #[test]
    fn analyze_uses_fixed_feedback_and_keeps_all_substitutions() {
        let substitutions = vec![
            Substitution {
                original: "important".to_string(),
                suggestion: "significatif".to_string(),
                reason: "Adjectif plus précis".to_string(),
                category: None,
            };
            7
        ];
        let result = HeuristicAnalyzer::new()
            .analyze(TWENTY_WORDS, substitutions)
            .unwrap();
        assert_eq!(result.feedback, FALLBACK_FEEDBACK);
        assert_eq!(result.substitutions.len(), 7);
        assert_eq!(result.scores.vocabulary, 100);
    }
}
