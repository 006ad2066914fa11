//! Value types produced by the scoring pipeline.

use crate::scoring_path::ScoringPath;
use serde::{Deserialize, Serialize};

/// Number of substitutions shown to a speaker. Scoring always uses the full list.
pub const MAX_DISPLAYED_SUBSTITUTIONS: usize = 5;

/// Reason attached to a vocabulary match whose entry carries none.
pub const DEFAULT_SUBSTITUTION_REASON: &str = "Expression plus soutenue et précise";

/// The four recognized sub-scores, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricName {
    Fluidity,
    Vocabulary,
    Grammar,
    Rhythm,
}

impl MetricName {
    pub const ALL: [MetricName; 4] = [
        MetricName::Fluidity,
        MetricName::Vocabulary,
        MetricName::Grammar,
        MetricName::Rhythm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricName::Fluidity => "Fluidité",
            MetricName::Vocabulary => "Vocabulaire",
            MetricName::Grammar => "Grammaire",
            MetricName::Rhythm => "Rythme",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MetricName::Fluidity => "#38B2AC",
            MetricName::Vocabulary => "#ED8936",
            MetricName::Grammar => "#9F7AEA",
            MetricName::Rhythm => "#F687B3",
        }
    }
}

/// A named sub-score as rendered to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: u8,
    pub color: Option<String>,
}

/// The four sub-scores, always present together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricScores {
    pub fluidity: u8,
    pub vocabulary: u8,
    pub grammar: u8,
    pub rhythm: u8,
}

impl MetricScores {
    /// Weighted overall score: vocabulary 0.35, fluidity 0.30, grammar 0.25, rhythm 0.10.
    ///
    /// Computed in hundredths so `x.5` always rounds up, never drifts on float error.
    pub fn overall(&self) -> u8 {
        let weighted = 35 * u32::from(self.vocabulary)
            + 30 * u32::from(self.fluidity)
            + 25 * u32::from(self.grammar)
            + 10 * u32::from(self.rhythm);
        ((weighted + 50) / 100).min(100) as u8
    }

    pub fn get(&self, name: MetricName) -> u8 {
        match name {
            MetricName::Fluidity => self.fluidity,
            MetricName::Vocabulary => self.vocabulary,
            MetricName::Grammar => self.grammar,
            MetricName::Rhythm => self.rhythm,
        }
    }

    /// Metrics in Fluidity, Vocabulary, Grammar, Rhythm order.
    pub fn metrics(&self) -> Vec<Metric> {
        MetricName::ALL
            .iter()
            .map(|name| Metric {
                name: name.label().to_string(),
                value: self.get(*name),
                color: Some(name.color().to_string()),
            })
            .collect()
    }
}

/// A suggested vocabulary replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub original: String,
    pub suggestion: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Result of one analysis of one transcript.
///
/// The overall score is derived from `scores` on demand and never stored on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub transcript: String,
    pub scores: MetricScores,
    pub feedback: String,
    pub substitutions: Vec<Substitution>,
}

impl AnalysisResult {
    pub fn overall_score(&self) -> u8 {
        self.scores.overall()
    }

    pub fn metrics(&self) -> Vec<Metric> {
        self.scores.metrics()
    }

    /// At most `MAX_DISPLAYED_SUBSTITUTIONS` substitutions, in transcript order.
    pub fn displayed_substitutions(&self) -> &[Substitution] {
        let end = self.substitutions.len().min(MAX_DISPLAYED_SUBSTITUTIONS);
        &self.substitutions[..end]
    }
}

/// How a transcript was scored.
///
/// Failure is carried by the surrounding `Result`; falling back is a normal
/// branch and keeps the reason the primary path was abandoned.
#[derive(Clone, Debug, PartialEq)]
pub enum ScoringOutcome {
    Primary(AnalysisResult),
    Fallback {
        result: AnalysisResult,
        reason: String,
    },
}

impl ScoringOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            ScoringOutcome::Primary(result) => result,
            ScoringOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            ScoringOutcome::Primary(result) => result,
            ScoringOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn scoring_path(&self) -> ScoringPath {
        match self {
            ScoringOutcome::Primary(_) => ScoringPath::Primary,
            ScoringOutcome::Fallback { .. } => ScoringPath::Fallback,
        }
    }

    /// True when the heuristic analyzer produced the scores.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScoringOutcome::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(fluidity: u8, vocabulary: u8, grammar: u8, rhythm: u8) -> MetricScores {
        MetricScores {
            fluidity,
            vocabulary,
            grammar,
            rhythm,
        }
    }

    #[test]
    fn overall_uses_fixed_weights() {
        // 28 + 25.5 + 20 + 9.3 = 82.8
        assert_eq!(scores(85, 80, 80, 93).overall(), 83);
        assert_eq!(scores(100, 100, 100, 100).overall(), 100);
        assert_eq!(scores(0, 0, 0, 0).overall(), 0);
    }

    #[test]
    fn overall_rounds_half_up() {
        // 35 * 71 + 30 * 75 + 25 * 80 + 10 * 71 = 7445 -> 74.45 -> 74
        assert_eq!(scores(75, 71, 80, 71).overall(), 74);
        // 35 * 70 + 30 * 75 + 25 * 80 + 10 * 75 = 7450 -> 74.5 -> 75
        assert_eq!(scores(75, 70, 80, 75).overall(), 75);
    }

    #[test]
    fn metrics_are_in_display_order() {
        let metrics = scores(85, 80, 80, 93).metrics();
        let names: Vec<&str> = metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Fluidité", "Vocabulaire", "Grammaire", "Rythme"]);
        assert_eq!(metrics[3].value, 93);
        assert_eq!(metrics[0].color.as_deref(), Some("#38B2AC"));
    }

    #[test]
    fn displayed_substitutions_are_capped() {
        let substitutions = (0..8)
            .map(|i| Substitution {
                original: format!("mot{i}"),
                suggestion: format!("terme{i}"),
                reason: DEFAULT_SUBSTITUTION_REASON.to_string(),
                category: None,
            })
            .collect();
        let result = AnalysisResult {
            transcript: "texte".to_string(),
            scores: scores(75, 70, 80, 75),
            feedback: String::new(),
            substitutions,
        };

        assert_eq!(result.displayed_substitutions().len(), MAX_DISPLAYED_SUBSTITUTIONS);
        assert_eq!(result.displayed_substitutions()[0].original, "mot0");
        assert_eq!(result.substitutions.len(), 8);
    }
}
