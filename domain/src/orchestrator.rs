//! Drives one recording through the scoring pipeline:
//! audio, transcript, primary or fallback scoring, persistence.

use crate::analysis::{AnalysisResult, MetricScores, ScoringOutcome, Substitution};
use crate::audio::AudioSource;
use crate::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind, PipelineErrorKind};
use crate::gateway::{openai::OpenAiClient, storage::StorageClient};
use crate::heuristic::HeuristicAnalyzer;
use crate::persistence::{DbGateway, PersistenceGateway};
use crate::substitution::SubstitutionMatcher;
use crate::vocabulary::VocabularyStore;
use crate::Id;
use log::*;
use sea_orm::DatabaseConnection;
use service::config::Config;
use speech_ai::traits::{analysis, transcription};
use speech_ai::types::analysis::Config as AnalysisConfig;
use speech_ai::types::transcription::Config as TranscriptionConfig;
use speech_ai::EloquenceReport;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const DEFAULT_TRANSCRIPTION_TIMEOUT: Duration = Duration::from_secs(9);
const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub recording_id: Id,
    /// Overrides the recording's stored audio path when set.
    pub audio_reference: Option<String>,
}

/// A computed analysis and whether it reached storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub recording_id: Id,
    pub outcome: ScoringOutcome,
    pub persisted: bool,
}

pub struct ScoringOrchestrator {
    audio_source: Arc<dyn AudioSource>,
    transcriber: Arc<dyn transcription::Provider>,
    analyzer: Arc<dyn analysis::Provider>,
    persistence: Arc<dyn PersistenceGateway>,
    vocabulary: Arc<VocabularyStore>,
    heuristic: HeuristicAnalyzer,
    matcher: SubstitutionMatcher,
    language: Option<String>,
    transcription_timeout: Duration,
    analysis_timeout: Duration,
}

impl ScoringOrchestrator {
    pub fn new(
        audio_source: Arc<dyn AudioSource>,
        transcriber: Arc<dyn transcription::Provider>,
        analyzer: Arc<dyn analysis::Provider>,
        persistence: Arc<dyn PersistenceGateway>,
        vocabulary: Arc<VocabularyStore>,
    ) -> Self {
        Self {
            audio_source,
            transcriber,
            analyzer,
            persistence,
            vocabulary,
            heuristic: HeuristicAnalyzer::new(),
            matcher: SubstitutionMatcher::new(),
            language: None,
            transcription_timeout: DEFAULT_TRANSCRIPTION_TIMEOUT,
            analysis_timeout: DEFAULT_ANALYSIS_TIMEOUT,
        }
    }

    /// Wires the OpenAI, storage and database collaborators from configuration.
    pub fn from_config(
        config: &Config,
        db: Arc<DatabaseConnection>,
        vocabulary: Arc<VocabularyStore>,
    ) -> Result<Self, Error> {
        let openai = Arc::new(OpenAiClient::from_config(config)?);
        let storage = Arc::new(StorageClient::from_config(config)?);

        Ok(Self::new(
            storage,
            openai.clone(),
            openai,
            Arc::new(DbGateway::new(db)),
            vocabulary,
        )
        .with_language(&config.transcription_language)
        .with_timeouts(config.transcription_timeout(), config.analysis_timeout()))
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string()).filter(|l| !l.is_empty());
        self
    }

    pub fn with_timeouts(mut self, transcription: Duration, analysis: Duration) -> Self {
        self.transcription_timeout = transcription;
        self.analysis_timeout = analysis;
        self
    }

    pub fn vocabulary(&self) -> &Arc<VocabularyStore> {
        &self.vocabulary
    }

    /// Runs the whole pipeline for one recording.
    ///
    /// Fails with `RecordingNotFound`, `TranscriptionFailed` or
    /// `EmptyTranscript`. A storage failure after scoring does not fail the
    /// call: the result is returned with `persisted == false`.
    pub async fn run(&self, request: AnalyzeRequest) -> Result<PipelineOutput, Error> {
        let recording_id = request.recording_id;
        let audio_reference = self.resolve_audio_reference(&request).await?;

        let audio = self.audio_source.fetch(&audio_reference).await?;
        let transcript = self.transcribe(audio.bytes, audio.file_name).await?;

        let substitutions = self.matcher.find(&transcript, &self.vocabulary.lookup());
        let outcome = self.score(&transcript, substitutions).await?;

        let persisted = match self.persist(recording_id, &outcome).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Analysis of recording {recording_id} computed but not stored: {e}");
                false
            }
        };

        info!(
            "Recording {recording_id} scored {} via {} path",
            outcome.result().overall_score(),
            outcome.scoring_path()
        );

        Ok(PipelineOutput {
            recording_id,
            outcome,
            persisted,
        })
    }

    /// Scores a transcript with the primary analyzer, falling back to the
    /// heuristic on any failure, timeout or out-of-range report.
    pub async fn score(
        &self,
        transcript: &str,
        vocabulary_matches: Vec<Substitution>,
    ) -> Result<ScoringOutcome, Error> {
        if transcript.split_whitespace().next().is_none() {
            return Err(Error::pipeline(PipelineErrorKind::EmptyTranscript));
        }

        let config = AnalysisConfig {
            transcript: transcript.to_string(),
            language_code: self.language.clone(),
        };

        let reason = match timeout(self.analysis_timeout, self.analyzer.analyze(config)).await {
            Ok(Ok(report)) => match primary_result(transcript, report, &vocabulary_matches) {
                Ok(result) => return Ok(ScoringOutcome::Primary(result)),
                Err(e) => e.to_string(),
            },
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!(
                "{} analysis timed out after {:?}",
                self.analyzer.provider_id(),
                self.analysis_timeout
            ),
        };

        warn!("Primary analysis unavailable, using heuristic scoring: {reason}");
        let result = self.heuristic.analyze(transcript, vocabulary_matches)?;
        Ok(ScoringOutcome::Fallback { result, reason })
    }

    async fn resolve_audio_reference(&self, request: &AnalyzeRequest) -> Result<String, Error> {
        let recording = self
            .persistence
            .find_recording(request.recording_id)
            .await
            .map_err(|e| {
                if e.error_kind
                    == DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
                {
                    warn!("Recording {} does not exist", request.recording_id);
                    Error::pipeline_with_source(PipelineErrorKind::RecordingNotFound, e)
                } else {
                    e
                }
            })?;

        Ok(request
            .audio_reference
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
            .map(str::to_string)
            .unwrap_or(recording.audio_path))
    }

    async fn transcribe(&self, audio: Vec<u8>, file_name: String) -> Result<String, Error> {
        let config = TranscriptionConfig {
            audio,
            file_name,
            language_code: self.language.clone(),
        };

        let transcription = match timeout(
            self.transcription_timeout,
            self.transcriber.transcribe(config),
        )
        .await
        {
            Ok(Ok(transcription)) => transcription,
            Ok(Err(e)) => {
                error!("Transcription failed: {e}");
                return Err(Error::pipeline_with_source(
                    PipelineErrorKind::TranscriptionFailed,
                    e,
                ));
            }
            Err(elapsed) => {
                error!(
                    "Transcription timed out after {:?}",
                    self.transcription_timeout
                );
                return Err(Error::pipeline_with_source(
                    PipelineErrorKind::TranscriptionFailed,
                    elapsed,
                ));
            }
        };

        let text = transcription.text.trim();
        if text.is_empty() {
            error!("Transcription returned no text");
            return Err(Error::pipeline(PipelineErrorKind::TranscriptionFailed));
        }
        Ok(text.to_string())
    }

    /// Attaches the transcript first and records the analysis only once that
    /// write is accepted, so a refused transcript leaves no analysis row.
    async fn persist(&self, recording_id: Id, outcome: &ScoringOutcome) -> Result<(), Error> {
        let result = outcome.result();

        self.persistence
            .attach_transcript(recording_id, &result.transcript, result.overall_score())
            .await
            .map_err(|e| Error::pipeline_with_source(PipelineErrorKind::PersistenceFailed, e))?;

        self.persistence
            .record_analysis(recording_id, outcome)
            .await
            .map_err(|e| Error::pipeline_with_source(PipelineErrorKind::PersistenceFailed, e))?;

        Ok(())
    }
}

/// Builds the primary result. The model's suggestions come first; vocabulary
/// matches are appended for originals the model did not mention.
fn primary_result(
    transcript: &str,
    report: EloquenceReport,
    vocabulary_matches: &[Substitution],
) -> Result<AnalysisResult, speech_ai::Error> {
    report.validate()?;

    let scores = MetricScores {
        fluidity: score_u8(report.score_fluidite),
        vocabulary: score_u8(report.score_vocabulaire),
        grammar: score_u8(report.score_grammaire),
        rhythm: score_u8(report.score_rythme),
    };

    let mut seen = HashSet::new();
    let substitutions = report
        .substitutions
        .into_iter()
        .map(|s| Substitution {
            original: s.original,
            suggestion: s.suggestion,
            reason: s.raison,
            category: None,
        })
        .chain(vocabulary_matches.iter().cloned())
        .filter(|s| seen.insert(s.original.to_lowercase()))
        .collect();

    Ok(AnalysisResult {
        transcript: transcript.to_string(),
        scores,
        feedback: report.feedback,
        substitutions,
    })
}

// Callers validate the range first.
fn score_u8(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
