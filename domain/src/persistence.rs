//! Storage of pipeline results.

use crate::analysis::ScoringOutcome;
use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::{analyses, recordings, Id};
use async_trait::async_trait;
use entity_api::{analysis, recording};
use log::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Writes and reads the rows the scoring pipeline owns.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn find_recording(&self, recording_id: Id) -> Result<recordings::Model, Error>;

    /// Stores the transcript and overall score on the recording. Refuses to
    /// replace a transcript that is already set to different text.
    async fn attach_transcript(
        &self,
        recording_id: Id,
        transcript: &str,
        overall_score: u8,
    ) -> Result<(), Error>;

    /// Appends a new analysis row; earlier rows are kept as history.
    async fn record_analysis(
        &self,
        recording_id: Id,
        outcome: &ScoringOutcome,
    ) -> Result<analyses::Model, Error>;
}

pub struct DbGateway {
    db: Arc<DatabaseConnection>,
}

impl DbGateway {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersistenceGateway for DbGateway {
    async fn find_recording(&self, recording_id: Id) -> Result<recordings::Model, Error> {
        Ok(recording::find_by_id(&self.db, recording_id).await?)
    }

    async fn attach_transcript(
        &self,
        recording_id: Id,
        transcript: &str,
        overall_score: u8,
    ) -> Result<(), Error> {
        recording::attach_transcript(
            &self.db,
            recording_id,
            transcript.to_string(),
            i32::from(overall_score),
        )
        .await?;
        Ok(())
    }

    async fn record_analysis(
        &self,
        recording_id: Id,
        outcome: &ScoringOutcome,
    ) -> Result<analyses::Model, Error> {
        let result = outcome.result();
        let substitutions = serde_json::to_value(&result.substitutions).map_err(|e| {
            warn!("Failed to serialize substitutions: {e:?}");
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to serialize substitutions".to_string(),
                )),
            }
        })?;

        let new_analysis = analysis::NewAnalysis {
            recording_id,
            fluidity_score: i32::from(result.scores.fluidity),
            vocabulary_score: i32::from(result.scores.vocabulary),
            grammar_score: i32::from(result.scores.grammar),
            rhythm_score: i32::from(result.scores.rhythm),
            overall_score: i32::from(result.overall_score()),
            substitutions,
            feedback: Some(result.feedback.clone()),
            scoring_path: outcome.scoring_path(),
        };

        Ok(analysis::create(&self.db, new_analysis).await?)
    }
}
