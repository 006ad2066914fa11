use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::analyses;
use domain::recording as RecordingApi;
use domain::Id;
use log::*;
use service::config::ApiVersion;

/// GET the analysis history of a recording, newest first.
#[utoipa::path(
    get,
    path = "/recordings/{id}/analyses",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Recording id whose analyses to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the analyses of a recording", body = [analyses::Model]),
        (status = 404, description = "Recording not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn analyses(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET analyses of recording: {id}");

    let analyses = RecordingApi::analysis_history(app_state.db_conn_ref(), id).await?;

    debug!("Found {} analyses for recording {id}", analyses.len());

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), analyses)))
}
