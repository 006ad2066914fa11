//! OpenAI API client for transcription and eloquence analysis.
//!
//! Implements both `speech_ai` provider traits: Whisper for speech-to-text and
//! a chat completion constrained to JSON output for scoring.

use crate::error::Error;
use async_trait::async_trait;
use log::*;
use serde::{Deserialize, Serialize};
use service::config::Config;
use speech_ai::traits::{analysis, transcription};
use speech_ai::types::analysis::Config as AnalysisConfig;
use speech_ai::types::transcription::{Config as TranscriptionConfig, Transcription};
use speech_ai::EloquenceReport;

const PROVIDER_ID: &str = "openai";
const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o-mini";
const ANALYSIS_TEMPERATURE: f32 = 0.3;
const ANALYSIS_MAX_TOKENS: u32 = 1000;

const ELOQUENCE_PROMPT: &str = r#"Tu es un expert en analyse d'éloquence française. Analyse le discours fourni et évalue ces critères:
1. Fluidité (note /100): évaluer la fluidité, le débit de parole, l'absence d'hésitations
2. Vocabulaire (note /100): richesse lexicale, précision des termes, absence de familiarités
3. Grammaire (note /100): correction syntaxique, conjugaisons, phrases bien construites
4. Rythme (note /100): prosodie, variations de ton, expressivité

Identifie également jusqu'à 5 expressions ou mots qui pourraient être améliorés, avec une suggestion
plus soutenue pour chacun et la raison de ce changement.

Donne aussi un court feedback général (2-3 phrases maximum).

Réponds UNIQUEMENT au format JSON suivant:
{
  "score_fluidite": <nombre entier>,
  "score_vocabulaire": <nombre entier>,
  "score_grammaire": <nombre entier>,
  "score_rythme": <nombre entier>,
  "substitutions": [{"original": "...", "suggestion": "...", "raison": "..."}],
  "feedback": "..."
}"#;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// OpenAI API client
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    transcription_model: String,
    analysis_model: String,
}

impl OpenAiClient {
    /// Create a new client. A missing API key is accepted here and reported
    /// as a configuration error on every call instead.
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        if config.openai_api_key().is_none() {
            warn!("OPENAI_API_KEY is not set: transcription will fail and analysis will fall back");
        }
        Ok(Self::new(config.openai_api_key(), config.openai_base_url())?
            .with_transcription_model(&config.transcription_model)
            .with_analysis_model(&config.analysis_model))
    }

    pub fn with_transcription_model(mut self, model: &str) -> Self {
        self.transcription_model = model.to_string();
        self
    }

    pub fn with_analysis_model(mut self, model: &str) -> Self {
        self.analysis_model = model.to_string();
        self
    }

    fn api_key(&self) -> Result<&str, speech_ai::Error> {
        self.api_key
            .as_deref()
            .ok_or_else(|| speech_ai::Error::Configuration("OPENAI_API_KEY is not set".to_string()))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, speech_ai::Error> {
        let response = request
            .bearer_auth(self.api_key()?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after_seconds = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let error_text = response.text().await.unwrap_or_default();
        error!("OpenAI API returned {status}: {error_text}");

        Err(match status.as_u16() {
            401 | 403 => speech_ai::Error::Authentication(error_text),
            429 => speech_ai::Error::RateLimited {
                retry_after_seconds,
            },
            _ => speech_ai::Error::Provider(format!("{} - {}", status.as_u16(), error_text)),
        })
    }
}

#[async_trait]
impl transcription::Provider for OpenAiClient {
    async fn transcribe(&self, config: TranscriptionConfig) -> Result<Transcription, speech_ai::Error> {
        let url = format!("{}/audio/transcriptions", self.base_url);
        debug!(
            "Transcribing {} ({} bytes) with {}",
            config.file_name,
            config.audio.len(),
            self.transcription_model
        );

        let file = reqwest::multipart::Part::bytes(config.audio).file_name(config.file_name);
        let mut form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("model", self.transcription_model.clone());
        if let Some(language) = &config.language_code {
            form = form.text("language", language.clone());
        }

        let response = self
            .send(self.client.post(&url).multipart(form))
            .await?;
        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| speech_ai::Error::Deserialization(e.to_string()))?;

        if body.text.trim().is_empty() {
            return Err(speech_ai::Error::InvalidResponse(
                "transcription returned no text".to_string(),
            ));
        }

        Ok(Transcription {
            text: body.text.trim().to_string(),
            language_code: body.language.or(config.language_code),
            duration_seconds: body.duration,
        })
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

#[async_trait]
impl analysis::Provider for OpenAiClient {
    async fn analyze(&self, config: AnalysisConfig) -> Result<EloquenceReport, speech_ai::Error> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.analysis_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ELOQUENCE_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &config.transcript,
                },
            ],
            temperature: ANALYSIS_TEMPERATURE,
            max_tokens: ANALYSIS_MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self.send(self.client.post(&url).json(&request)).await?;
        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| speech_ai::Error::Deserialization(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                speech_ai::Error::InvalidResponse("completion has no message content".to_string())
            })?;

        let report = EloquenceReport::from_json(&content).inspect_err(|e| {
            warn!("Rejected eloquence analysis: {e}");
        })?;
        debug!("Eloquence analysis received with {} substitutions", report.substitutions.len());
        Ok(report)
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

fn map_reqwest_error(err: reqwest::Error) -> speech_ai::Error {
    warn!("OpenAI request failed: {err:?}");
    if err.is_timeout() {
        speech_ai::Error::Timeout(err.to_string())
    } else {
        speech_ai::Error::Network(err.to_string())
    }
}
