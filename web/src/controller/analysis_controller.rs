//! Controller for running the eloquence scoring pipeline on a recording.

use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::analysis::AnalyzeParams;
use crate::response::analysis::AnalyzeResponse;
use crate::{AppState, Error};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::orchestrator::AnalyzeRequest;
use log::*;
use service::config::ApiVersion;

/// POST analyze a recording
///
/// Transcribes the recording's audio, scores it and stores the result. When
/// the language-model analysis is unavailable the scores come from the local
/// heuristic analyzer and `degraded` is set.
#[utoipa::path(
    post,
    path = "/analyze",
    params(ApiVersion),
    request_body = AnalyzeParams,
    responses(
        (status = 200, description = "Recording analyzed", body = AnalyzeResponse),
        (status = 400, description = "Unsupported API version"),
        (status = 404, description = "Recording or its audio not found"),
        (status = 422, description = "Transcription failed or produced no words"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn analyze(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(params): Json<AnalyzeParams>,
) -> Response {
    debug!("POST analyze recording {}", params.recording_id);

    let request = AnalyzeRequest::from(params);
    match app_state.orchestrator.run(request).await {
        Ok(output) => {
            if !output.persisted {
                warn!(
                    "Analysis of recording {} returned without being stored",
                    output.recording_id
                );
            }
            (StatusCode::OK, Json(AnalyzeResponse::from(output))).into_response()
        }
        Err(e) => Error::from(e).into_failure_response(),
    }
}
