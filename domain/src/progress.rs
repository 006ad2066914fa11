//! Per-user progress summary across recordings and analyses.

use crate::error::Error;
use crate::{analyses, recordings, Id};
use entity_api::{analysis, recording};
use log::*;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

const TOP_TERMS: usize = 5;
const INTERMEDIATE_THRESHOLD: usize = 20;
const ADVANCED_THRESHOLD: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VocabularyLevel {
    #[serde(rename = "débutant")]
    Beginner,
    #[serde(rename = "intermédiaire")]
    Intermediate,
    #[serde(rename = "avancé")]
    Advanced,
}

impl VocabularyLevel {
    /// Level reached after `substitution_count` suggested replacements.
    pub fn from_substitution_count(substitution_count: usize) -> Self {
        if substitution_count > ADVANCED_THRESHOLD {
            VocabularyLevel::Advanced
        } else if substitution_count > INTERMEDIATE_THRESHOLD {
            VocabularyLevel::Intermediate
        } else {
            VocabularyLevel::Beginner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VocabularyLevel::Beginner => "débutant",
            VocabularyLevel::Intermediate => "intermédiaire",
            VocabularyLevel::Advanced => "avancé",
        }
    }
}

impl fmt::Display for VocabularyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermFrequency {
    pub original: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub session_count: usize,
    pub total_duration_seconds: i64,
    /// Mean overall score of scored recordings, one decimal.
    pub average_score: f64,
    /// Change from the first to the latest scored recording, in percent.
    pub improvement_rate: f64,
    pub substitution_count: usize,
    pub top_substitutions: Vec<TermFrequency>,
    pub vocabulary_level: VocabularyLevel,
}

impl ProgressReport {
    /// `recordings` and `analyses` must be ordered oldest first.
    pub fn compute(recordings: &[recordings::Model], analyses: &[analyses::Model]) -> Self {
        let scores: Vec<i32> = recordings
            .iter()
            .filter_map(|recording| recording.eloquence_score)
            .collect();

        let average_score = if scores.is_empty() {
            0.0
        } else {
            round1(scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64)
        };

        let improvement_rate = match (scores.first(), scores.last()) {
            (Some(&first), Some(&last)) if scores.len() >= 2 && first > 0 => {
                round1(f64::from(last - first) / f64::from(first) * 100.0)
            }
            _ => 0.0,
        };

        let originals: Vec<String> = analyses
            .iter()
            .flat_map(|analysis| substitution_originals(&analysis.substitutions))
            .collect();

        Self {
            session_count: recordings.len(),
            total_duration_seconds: recordings
                .iter()
                .map(|recording| i64::from(recording.duration_seconds))
                .sum(),
            average_score,
            improvement_rate,
            substitution_count: originals.len(),
            top_substitutions: top_terms(&originals),
            vocabulary_level: VocabularyLevel::from_substitution_count(originals.len()),
        }
    }
}

pub async fn for_user(db: &DatabaseConnection, user_id: Id) -> Result<ProgressReport, Error> {
    debug!("Computing progress for user {user_id}");
    let recordings = recording::find_by_user_id(db, user_id).await?;
    let analyses = analysis::find_by_user_id(db, user_id).await?;
    Ok(ProgressReport::compute(&recordings, &analyses))
}

fn substitution_originals(substitutions: &serde_json::Value) -> Vec<String> {
    substitutions
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("original").and_then(|o| o.as_str()))
                .map(|original| original.trim().to_lowercase())
                .filter(|original| !original.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Most frequent originals, count descending, ties by first appearance.
fn top_terms(originals: &[String]) -> Vec<TermFrequency> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, original) in originals.iter().enumerate() {
        counts.entry(original.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(original, (count, first_seen))| (original, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(TOP_TERMS)
        .map(|(original, count, _)| TermFrequency {
            original: original.to_string(),
            count,
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
