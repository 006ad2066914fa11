//! Client for the object storage bucket holding recorded audio.

use crate::audio::{AudioFile, AudioSource};
use crate::error::{DomainErrorKind, Error, ExternalErrorKind, PipelineErrorKind};
use async_trait::async_trait;
use log::*;
use service::config::Config;

const DEFAULT_FILE_NAME: &str = "audio.mp3";

pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl StorageClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(config.storage_base_url(), config.storage_api_key())
    }

    /// Resolves a reference to a URL inside the bucket. Absolute URLs are
    /// only accepted under the bucket base URL, and `..` segments are refused,
    /// so the storage key is never sent anywhere else.
    fn resolve(&self, audio_reference: &str) -> Option<String> {
        if audio_reference.starts_with("http://") || audio_reference.starts_with("https://") {
            let path = audio_reference.strip_prefix(&format!("{}/", self.base_url))?;
            return (!escapes_bucket(path)).then(|| audio_reference.to_string());
        }

        let path = audio_reference.trim_start_matches('/');
        if escapes_bucket(path) {
            return None;
        }
        Some(format!("{}/{}", self.base_url, path))
    }
}

fn escapes_bucket(path: &str) -> bool {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split(['/', '\\'])
        .any(|segment| segment == ".." || segment.eq_ignore_ascii_case("%2e%2e"))
}

#[async_trait]
impl AudioSource for StorageClient {
    async fn fetch(&self, audio_reference: &str) -> Result<AudioFile, Error> {
        let audio_reference = audio_reference.trim();
        if audio_reference.is_empty() {
            return Err(Error::pipeline(PipelineErrorKind::RecordingNotFound));
        }

        let Some(url) = self.resolve(audio_reference) else {
            warn!("Refusing audio reference outside the recordings bucket: {audio_reference}");
            return Err(Error::pipeline(PipelineErrorKind::RecordingNotFound));
        };
        debug!("Downloading audio from {url}");

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Failed to download audio {audio_reference}: {e:?}");
            Error::from(e)
        })?;

        let status = response.status();
        // Storage APIs answer 400 for object keys that do not exist
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::BAD_REQUEST {
            warn!("No audio stored at {audio_reference}");
            return Err(Error::pipeline(PipelineErrorKind::RecordingNotFound));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Audio storage returned {status}: {error_text}");
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Provider(format!(
                    "Audio storage returned {}",
                    status.as_u16()
                ))),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            warn!("Audio at {audio_reference} is empty");
            return Err(Error::pipeline(PipelineErrorKind::RecordingNotFound));
        }

        Ok(AudioFile {
            bytes,
            file_name: file_name(audio_reference),
        })
    }
}

/// Last path segment when it carries an extension, so providers can detect
/// the container format.
fn file_name(audio_reference: &str) -> String {
    audio_reference
        .split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').next())
        .filter(|name| name.contains('.'))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}
