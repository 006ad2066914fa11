//! Types for eloquence analysis operations.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Input of an analysis call.
#[derive(Debug, Clone)]
pub struct Config {
    pub transcript: String,
    pub language_code: Option<String>,
}

/// One replacement proposed by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportedSubstitution {
    pub original: String,
    pub suggestion: String,
    pub raison: String,
}

/// The exact JSON object a language model must return.
///
/// Unknown keys are rejected so that a drifting prompt or model surfaces as a
/// failure instead of silently producing half-filled scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EloquenceReport {
    pub score_fluidite: i64,
    pub score_vocabulaire: i64,
    pub score_grammaire: i64,
    pub score_rythme: i64,
    pub substitutions: Vec<ReportedSubstitution>,
    pub feedback: String,
}

impl EloquenceReport {
    /// Parses and validates a raw JSON document.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let report: EloquenceReport = serde_json::from_str(raw)?;
        report.validate()?;
        Ok(report)
    }

    /// Checks that every score lies in 0..=100.
    ///
    /// Out-of-range scores are rejected rather than clamped so that upstream
    /// provider errors are not masked.
    pub fn validate(&self) -> Result<(), Error> {
        let scores = [
            ("score_fluidite", self.score_fluidite),
            ("score_vocabulaire", self.score_vocabulaire),
            ("score_grammaire", self.score_grammaire),
            ("score_rythme", self.score_rythme),
        ];

        for (name, value) in scores {
            if !(0..=100).contains(&value) {
                return Err(Error::InvalidResponse(format!(
                    "{name} out of range: {value}"
                )));
            }
        }

        Ok(())
    }
}
