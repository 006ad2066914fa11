//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` maps the resulting `error_kind` to HTTP status codes and
/// never depends directly on `entity_api` or `speech-ai`.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}
/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Pipeline(PipelineErrorKind),
    Config,
    Other(String),
}

/// Enum representing the various kinds of entity errors that can bubble up from the "Entity" layer (`entity_api` and `entity`).
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Conflict,
    DbTransaction,
    Other(String),
}

/// Failures of the scoring pipeline and of vocabulary ingestion.
///
/// Falling back to heuristic scoring is not listed here: it is a successful
/// outcome (`ScoringOutcome::Fallback`), not an error.
#[derive(Debug, PartialEq)]
pub enum PipelineErrorKind {
    RecordingNotFound,
    TranscriptionFailed,
    EmptyTranscript,
    PersistenceFailed,
    MalformedVocabularyFile,
}

/// Enum representing the various kinds of external errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Timeout,
    Provider(String),
}

impl Error {
    pub fn pipeline(kind: PipelineErrorKind) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Pipeline(kind)),
        }
    }

    pub fn pipeline_with_source<E>(kind: PipelineErrorKind, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error {
            source: Some(Box::new(source)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Pipeline(kind)),
        }
    }

    pub fn config(message: &str) -> Self {
        Error {
            source: Some(message.into()),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }

    /// Returns the pipeline error kind, if this error is one.
    pub fn pipeline_kind(&self) -> Option<&PipelineErrorKind> {
        match &self.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Pipeline(kind)) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Domain Error: {:?} ({source})", self.error_kind),
            None => write!(f, "Domain Error: {:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            EntityApiErrorKind::InvalidQueryTerm | EntityApiErrorKind::ValidationError => {
                EntityErrorKind::Invalid
            }
            EntityApiErrorKind::Conflict => EntityErrorKind::Conflict,
            EntityApiErrorKind::SystemError => EntityErrorKind::DbTransaction,
            _ => EntityErrorKind::Other("EntityErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        } else if err.is_timeout() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Timeout),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}

impl From<speech_ai::Error> for Error {
    fn from(err: speech_ai::Error) -> Self {
        let error_kind = match &err {
            speech_ai::Error::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
            speech_ai::Error::Timeout(_) => DomainErrorKind::External(ExternalErrorKind::Timeout),
            speech_ai::Error::Configuration(_) => {
                DomainErrorKind::Internal(InternalErrorKind::Config)
            }
            other => DomainErrorKind::External(ExternalErrorKind::Provider(other.to_string())),
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_translates_to_entity_kind() {
        let err: Error = EntityApiError::new(EntityApiErrorKind::RecordNotFound).into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
        assert!(err.pipeline_kind().is_none());
    }

    #[test]
    fn entity_conflict_translates_to_conflict() {
        let err: Error = EntityApiError::new(EntityApiErrorKind::Conflict).into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );
    }

    #[test]
    fn speech_ai_errors_translate_by_category() {
        let err: Error = speech_ai::Error::Timeout("whisper".to_string()).into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Timeout)
        );

        let err: Error = speech_ai::Error::Configuration("no key".to_string()).into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Config)
        );

        let err: Error = speech_ai::Error::InvalidResponse("bad".to_string()).into();
        assert!(matches!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Provider(_))
        ));
    }

    #[test]
    fn pipeline_kind_is_exposed() {
        let err = Error::pipeline(PipelineErrorKind::EmptyTranscript);
        assert_eq!(err.pipeline_kind(), Some(&PipelineErrorKind::EmptyTranscript));
    }
}
