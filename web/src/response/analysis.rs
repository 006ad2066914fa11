//! Body of the analyze endpoint, in the shape the recording UI consumes.

use domain::analysis::{Metric, Substitution};
use domain::orchestrator::PipelineOutput;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub(crate) struct MetricResponse {
    pub(crate) name: String,
    pub(crate) value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<String>,
}

impl From<Metric> for MetricResponse {
    fn from(metric: Metric) -> Self {
        Self {
            name: metric.name,
            value: metric.value,
            color: metric.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub(crate) struct ReplacementResponse {
    pub(crate) original: String,
    pub(crate) suggestion: String,
    pub(crate) reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) category: Option<String>,
}

impl From<&Substitution> for ReplacementResponse {
    fn from(substitution: &Substitution) -> Self {
        Self {
            original: substitution.original.clone(),
            suggestion: substitution.suggestion.clone(),
            reason: substitution.reason.clone(),
            category: substitution.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub(crate) struct AnalysisBody {
    pub(crate) transcript: String,
    /// Overall eloquence score, 0-100.
    pub(crate) score: u8,
    pub(crate) metrics: Vec<MetricResponse>,
    pub(crate) feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub(crate) struct AnalyzeResponse {
    pub(crate) success: bool,
    pub(crate) analysis: AnalysisBody,
    /// At most five suggestions, in transcript order.
    pub(crate) suggestions: Vec<ReplacementResponse>,
    /// True when the scores come from the local heuristic analyzer.
    pub(crate) degraded: bool,
    /// False when the results could not be stored.
    pub(crate) persisted: bool,
}

impl From<PipelineOutput> for AnalyzeResponse {
    fn from(output: PipelineOutput) -> Self {
        let degraded = output.outcome.is_degraded();
        let result = output.outcome.into_result();
        let suggestions = result
            .displayed_substitutions()
            .iter()
            .map(ReplacementResponse::from)
            .collect();

        Self {
            success: true,
            analysis: AnalysisBody {
                score: result.overall_score(),
                metrics: result.metrics().into_iter().map(MetricResponse::from).collect(),
                transcript: result.transcript,
                feedback: result.feedback,
            },
            suggestions,
            degraded,
            persisted: output.persisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::analysis::{AnalysisResult, MetricScores, ScoringOutcome};
    use domain::Id;
    use serde_json::json;

    fn substitution(original: &str) -> Substitution {
        Substitution {
            original: original.to_string(),
            suggestion: format!("{original}!"),
            reason: "Plus précis".to_string(),
            category: None,
        }
    }

    fn result(substitution_count: usize) -> AnalysisResult {
        AnalysisResult {
            transcript: "Bonjour à tous.".to_string(),
            scores: MetricScores {
                fluidity: 80,
                vocabulary: 70,
                grammar: 90,
                rhythm: 60,
            },
            feedback: "Bon travail".to_string(),
            substitutions: (0..substitution_count)
                .map(|i| substitution(&format!("mot{i}")))
                .collect(),
        }
    }

    #[test]
    fn renders_primary_outcome() {
        let output = PipelineOutput {
            recording_id: Id::new_v4(),
            outcome: ScoringOutcome::Primary(result(1)),
            persisted: true,
        };

        let value = serde_json::to_value(AnalyzeResponse::from(output)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "analysis": {
                    "transcript": "Bonjour à tous.",
                    "score": 77,
                    "metrics": [
                        { "name": "Fluidité", "value": 80, "color": "#38B2AC" },
                        { "name": "Vocabulaire", "value": 70, "color": "#ED8936" },
                        { "name": "Grammaire", "value": 90, "color": "#9F7AEA" },
                        { "name": "Rythme", "value": 60, "color": "#F687B3" }
                    ],
                    "feedback": "Bon travail"
                },
                "suggestions": [
                    { "original": "mot0", "suggestion": "mot0!", "reason": "Plus précis" }
                ],
                "degraded": false,
                "persisted": true
            })
        );
    }

    #[test]
    fn fallback_outcome_is_flagged_and_suggestions_capped() {
        let output = PipelineOutput {
            recording_id: Id::new_v4(),
            outcome: ScoringOutcome::Fallback {
                result: result(8),
                reason: "timeout".to_string(),
            },
            persisted: false,
        };

        let response = AnalyzeResponse::from(output);
        assert!(response.degraded);
        assert!(!response.persisted);
        assert_eq!(response.suggestions.len(), 5);
        assert_eq!(response.suggestions[4].original, "mot4");
    }
}
