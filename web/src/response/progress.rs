use domain::progress::{ProgressReport, TermFrequency};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub(crate) struct TermFrequencyResponse {
    pub(crate) original: String,
    pub(crate) count: usize,
}

impl From<TermFrequency> for TermFrequencyResponse {
    fn from(term: TermFrequency) -> Self {
        Self {
            original: term.original,
            count: term.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub(crate) struct ProgressResponse {
    pub(crate) session_count: usize,
    pub(crate) total_duration_seconds: i64,
    pub(crate) average_score: f64,
    /// Percent change from the first to the latest scored recording.
    pub(crate) improvement_rate: f64,
    pub(crate) substitution_count: usize,
    pub(crate) top_substitutions: Vec<TermFrequencyResponse>,
    /// One of `débutant`, `intermédiaire`, `avancé`.
    pub(crate) vocabulary_level: String,
}

impl From<ProgressReport> for ProgressResponse {
    fn from(report: ProgressReport) -> Self {
        Self {
            session_count: report.session_count,
            total_duration_seconds: report.total_duration_seconds,
            average_score: report.average_score,
            improvement_rate: report.improvement_rate,
            substitution_count: report.substitution_count,
            top_substitutions: report
                .top_substitutions
                .into_iter()
                .map(TermFrequencyResponse::from)
                .collect(),
            vocabulary_level: report.vocabulary_level.to_string(),
        }
    }
}
