use domain::orchestrator::AnalyzeRequest;
use domain::Id;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeParams {
    /// Audio path inside the recordings bucket, or an absolute URL under the
    /// bucket base URL. Defaults to the audio path stored on the recording.
    #[serde(default)]
    pub(crate) audio_url: Option<String>,
    #[schema(value_type = Uuid)]
    pub(crate) recording_id: Id,
}

impl From<AnalyzeParams> for AnalyzeRequest {
    fn from(params: AnalyzeParams) -> Self {
        AnalyzeRequest {
            recording_id: params.recording_id,
            audio_reference: params.audio_url.filter(|url| !url.trim().is_empty()),
        }
    }
}
