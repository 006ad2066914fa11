//! In-memory fakes of the domain's storage and provider seams.

use crate::analysis::ScoringOutcome;
use crate::audio::{AudioFile, AudioSource};
use crate::error::{Error, PipelineErrorKind};
use crate::persistence::PersistenceGateway;
use crate::scoring_path::ScoringPath;
use crate::vocabulary::parser::DEFAULT_LEVEL;
use crate::vocabulary::VocabularyRepository;
use crate::{analyses, recordings, vocabulary_entries, Id};
use async_trait::async_trait;
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use entity_api::vocabulary_entry::NewEntry;
use speech_ai::traits::{analysis, transcription};
use speech_ai::types::analysis::Config as AnalysisConfig;
use speech_ai::types::transcription::{Config as TranscriptionConfig, Transcription};
use speech_ai::EloquenceReport;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub(crate) struct InMemoryRepository {
    pub(crate) rows: Mutex<Vec<vocabulary_entries::Model>>,
    pub(crate) batch_calls: Mutex<usize>,
    /// 1-based index of the insert_batch call that fails.
    pub(crate) failing_batch: Option<usize>,
}

impl InMemoryRepository {
    pub(crate) fn with_rows(rows: &[(&str, &str)]) -> Self {
        let repository = Self::default();
        {
            let mut stored = repository.rows.lock().unwrap();
            for (original, improved) in rows {
                stored.push(vocabulary_model(original, improved));
            }
        }
        repository
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

pub(crate) fn vocabulary_model(original: &str, improved: &str) -> vocabulary_entries::Model {
    vocabulary_entries::Model {
        id: Id::new_v4(),
        original: original.to_string(),
        improved: improved.to_string(),
        reason: "Plus soutenu".to_string(),
        category: "général".to_string(),
        level: DEFAULT_LEVEL.to_string(),
        usage_example: None,
        created_at: chrono::Utc::now().fixed_offset(),
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryRepository {
    async fn existing_pairs(
        &self,
        pairs: &[(String, String)],
    ) -> Result<HashSet<(String, String)>, Error> {
        let rows = self.rows.lock().unwrap();
        Ok(pairs
            .iter()
            .filter(|(o, i)| rows.iter().any(|r| &r.original == o && &r.improved == i))
            .cloned()
            .collect())
    }

    async fn insert_batch(&self, entries: Vec<NewEntry>) -> Result<u64, Error> {
        let call = {
            let mut calls = self.batch_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.failing_batch == Some(call) {
            return Err(EntityApiError::new(EntityApiErrorKind::SystemError).into());
        }
        let mut rows = self.rows.lock().unwrap();
        let written = entries.len() as u64;
        for entry in entries {
            let mut row = vocabulary_model(&entry.original, &entry.improved);
            row.category = entry.category;
            row.reason = entry.reason;
            row.level = entry.level;
            rows.push(row);
        }
        Ok(written)
    }

    async fn all_entries(&self) -> Result<Vec<vocabulary_entries::Model>, Error> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Serves fixed bytes, or nothing.
pub(crate) struct StaticAudio(pub(crate) Option<Vec<u8>>);

#[async_trait]
impl AudioSource for StaticAudio {
    async fn fetch(&self, audio_reference: &str) -> Result<AudioFile, Error> {
        match &self.0 {
            Some(bytes) => Ok(AudioFile {
                bytes: bytes.clone(),
                file_name: audio_reference.to_string(),
            }),
            None => Err(Error::pipeline(PipelineErrorKind::RecordingNotFound)),
        }
    }
}

pub(crate) enum Scripted<T> {
    Return(T),
    Fail,
    Hang,
}

pub(crate) struct FakeTranscriber(pub(crate) Scripted<String>);

#[async_trait]
impl transcription::Provider for FakeTranscriber {
    async fn transcribe(
        &self,
        config: TranscriptionConfig,
    ) -> Result<Transcription, speech_ai::Error> {
        match &self.0 {
            Scripted::Return(text) => Ok(Transcription {
                text: text.clone(),
                language_code: config.language_code,
                duration_seconds: None,
            }),
            Scripted::Fail => Err(speech_ai::Error::Provider("unsupported format".to_string())),
            Scripted::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(speech_ai::Error::Timeout("never".to_string()))
            }
        }
    }

    fn provider_id(&self) -> &str {
        "fake"
    }
}

pub(crate) struct FakeAnalyzer(pub(crate) Scripted<EloquenceReport>);

#[async_trait]
impl analysis::Provider for FakeAnalyzer {
    async fn analyze(&self, _config: AnalysisConfig) -> Result<EloquenceReport, speech_ai::Error> {
        match &self.0 {
            Scripted::Return(report) => Ok(report.clone()),
            Scripted::Fail => Err(speech_ai::Error::RateLimited {
                retry_after_seconds: 30,
            }),
            Scripted::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(speech_ai::Error::Timeout("never".to_string()))
            }
        }
    }

    fn provider_id(&self) -> &str {
        "fake"
    }
}

/// Keeps recordings and appended analyses in memory.
#[derive(Default)]
pub(crate) struct InMemoryPersistence {
    pub(crate) recordings: Mutex<HashMap<Id, recordings::Model>>,
    pub(crate) analyses: Mutex<Vec<analyses::Model>>,
    pub(crate) fail_writes: bool,
}

impl InMemoryPersistence {
    pub(crate) fn with_recording(recording: recordings::Model) -> Self {
        let persistence = Self::default();
        persistence
            .recordings
            .lock()
            .unwrap()
            .insert(recording.id, recording);
        persistence
    }
}

pub(crate) fn recording_model(user_id: Id, audio_path: &str, duration_seconds: i32) -> recordings::Model {
    let now = chrono::Utc::now().fixed_offset();
    recordings::Model {
        id: Id::new_v4(),
        user_id,
        audio_path: audio_path.to_string(),
        duration_seconds,
        transcript: None,
        eloquence_score: None,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn analysis_model(
    recording_id: Id,
    overall_score: i32,
    substitutions: serde_json::Value,
    scoring_path: ScoringPath,
) -> analyses::Model {
    analyses::Model {
        id: Id::new_v4(),
        recording_id,
        fluidity_score: overall_score,
        vocabulary_score: overall_score,
        grammar_score: overall_score,
        rhythm_score: overall_score,
        overall_score,
        substitutions,
        feedback: None,
        scoring_path,
        created_at: chrono::Utc::now().fixed_offset(),
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryPersistence {
    async fn find_recording(&self, recording_id: Id) -> Result<recordings::Model, Error> {
        self.recordings
            .lock()
            .unwrap()
            .get(&recording_id)
            .cloned()
            .ok_or_else(|| EntityApiError::new(EntityApiErrorKind::RecordNotFound).into())
    }

    async fn attach_transcript(
        &self,
        recording_id: Id,
        transcript: &str,
        overall_score: u8,
    ) -> Result<(), Error> {
        if self.fail_writes {
            return Err(EntityApiError::new(EntityApiErrorKind::SystemError).into());
        }
        let mut recordings = self.recordings.lock().unwrap();
        let recording = recordings
            .get_mut(&recording_id)
            .ok_or_else(|| Error::from(EntityApiError::new(EntityApiErrorKind::RecordNotFound)))?;
        if recording
            .transcript
            .as_deref()
            .is_some_and(|current| current != transcript)
        {
            return Err(EntityApiError::new(EntityApiErrorKind::ValidationError).into());
        }
        recording.transcript = Some(transcript.to_string());
        recording.eloquence_score = Some(i32::from(overall_score));
        Ok(())
    }

    async fn record_analysis(
        &self,
        recording_id: Id,
        outcome: &ScoringOutcome,
    ) -> Result<analyses::Model, Error> {
        if self.fail_writes {
            return Err(EntityApiError::new(EntityApiErrorKind::SystemError).into());
        }
        let result = outcome.result();
        let mut model = analysis_model(
            recording_id,
            i32::from(result.overall_score()),
            serde_json::to_value(&result.substitutions).unwrap(),
            outcome.scoring_path(),
        );
        model.fluidity_score = i32::from(result.scores.fluidity);
        model.vocabulary_score = i32::from(result.scores.vocabulary);
        model.grammar_score = i32::from(result.scores.grammar);
        model.rhythm_score = i32::from(result.scores.rhythm);
        model.feedback = Some(result.feedback.clone());
        self.analyses.lock().unwrap().push(model.clone());
        Ok(model)
    }
}
