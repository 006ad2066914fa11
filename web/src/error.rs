use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
    PipelineErrorKind,
};
use log::*;
use serde_json::json;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match &self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Pipeline(pipeline_error_kind) => match pipeline_error_kind {
                    PipelineErrorKind::RecordingNotFound => StatusCode::NOT_FOUND,
                    PipelineErrorKind::TranscriptionFailed
                    | PipelineErrorKind::EmptyTranscript => StatusCode::UNPROCESSABLE_ENTITY,
                    PipelineErrorKind::MalformedVocabularyFile => StatusCode::BAD_REQUEST,
                    PipelineErrorKind::PersistenceFailed => StatusCode::INTERNAL_SERVER_ERROR,
                },
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => StatusCode::NOT_FOUND,
                    EntityErrorKind::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
                    EntityErrorKind::Conflict => StatusCode::CONFLICT,
                    EntityErrorKind::DbTransaction | EntityErrorKind::Other(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                },
                InternalErrorKind::Config | InternalErrorKind::Other(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Network | ExternalErrorKind::Provider(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ExternalErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            },
        }
    }

    /// Short client-facing description of the failure.
    pub fn message(&self) -> String {
        match &self.0.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Pipeline(kind)) => match kind {
                PipelineErrorKind::RecordingNotFound => "Recording not found".to_string(),
                PipelineErrorKind::TranscriptionFailed => "Transcription failed".to_string(),
                PipelineErrorKind::EmptyTranscript => "Transcript is empty".to_string(),
                PipelineErrorKind::PersistenceFailed => {
                    "Failed to store analysis results".to_string()
                }
                PipelineErrorKind::MalformedVocabularyFile => match &self.0.source {
                    Some(source) => format!("Malformed vocabulary file: {source}"),
                    None => "Malformed vocabulary file".to_string(),
                },
            },
            DomainErrorKind::External(ExternalErrorKind::Provider(message)) => message.clone(),
            _ => self
                .status_code()
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_uppercase(),
        }
    }

    /// Renders the error as `{ success: false, error }`, the body shape the
    /// analyze and vocabulary sync endpoints always answer with.
    pub fn into_failure_response(self) -> Response {
        let status = self.status_code();
        log_failure(status, &self.0);
        (status, Json(json!({ "success": false, "error": self.message() }))).into_response()
    }
}

fn log_failure(status: StatusCode, error: &DomainError) {
    if status.is_server_error() {
        error!("Request failed with {status}: {error}");
    } else {
        debug!("Request failed with {status}: {error}");
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log_failure(status, &self.0);
        (status, self.message()).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
