//! Controller for maintaining the replacement vocabulary used by the
//! substitution matcher.

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::vocabulary::{SubstitutionParams, SuggestionParams, SyncParams};
use crate::response::vocabulary::{RefreshResponse, SuggestionResponse, SyncResponse};
use crate::{AppState, Error};

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::analysis::Substitution;
use domain::vocabulary::VocabularyStore;
use log::*;
use service::config::ApiVersion;

const EXPORT_FILE_NAME: &str = "vocabulaire.csv";

/// POST sync the vocabulary from a remote CSV file
#[utoipa::path(
    post,
    path = "/vocabulary/sync",
    params(ApiVersion),
    request_body = SyncParams,
    responses(
        (status = 200, description = "File processed, see `success` and `message`", body = SyncResponse),
        (status = 400, description = "The file is missing required columns"),
        (status = 502, description = "The file could not be downloaded")
    )
)]
pub async fn sync(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(params): Json<SyncParams>,
) -> Response {
    info!(
        "POST sync vocabulary from {} (category {})",
        params.file_url, params.category
    );

    match app_state
        .vocabulary()
        .sync_from_url(&params.file_url, &params.category)
        .await
    {
        Ok(report) => (StatusCode::OK, Json(SyncResponse::from(report))).into_response(),
        Err(e) => Error::from(e).into_failure_response(),
    }
}

/// POST rebuild the in-memory vocabulary lookup
#[utoipa::path(
    post,
    path = "/vocabulary/refresh",
    params(ApiVersion),
    responses(
        (status = 200, description = "Lookup rebuilt", body = RefreshResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn refresh(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST refresh vocabulary lookup");

    let entries = app_state.vocabulary().refresh().await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        RefreshResponse { entries },
    )))
}

/// POST suggest a single replacement to add to the vocabulary
#[utoipa::path(
    post,
    path = "/vocabulary/suggestions",
    params(ApiVersion),
    request_body = SuggestionParams,
    responses(
        (status = 200, description = "Pair already stored, nothing added", body = SuggestionResponse),
        (status = 201, description = "Pair added", body = SuggestionResponse),
        (status = 422, description = "Original or improved term is blank")
    )
)]
pub async fn suggest(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(params): Json<SuggestionParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST vocabulary suggestion {:?} -> {:?}",
        params.original, params.improved
    );

    let report = app_state
        .vocabulary()
        .submit_suggestion(&params.original, &params.improved, &params.reason)
        .await?;

    let status = if report.added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ApiResponse::new(
            status.into(),
            SuggestionResponse::from(report),
        )),
    ))
}

/// POST export suggested replacements as a vocabulary CSV file
#[utoipa::path(
    post,
    path = "/vocabulary/export",
    params(ApiVersion),
    request_body = [SubstitutionParams],
    responses(
        (status = 200, description = "CSV file with a motOriginal,motAmeliore,raison header", body = String, content_type = "text/csv")
    )
)]
pub async fn export(
    CompareApiVersion(_v): CompareApiVersion,
    Json(params): Json<Vec<SubstitutionParams>>,
) -> impl IntoResponse {
    debug!("POST export {} substitutions", params.len());

    let substitutions: Vec<Substitution> = params.into_iter().map(Substitution::from).collect();
    let csv = VocabularyStore::export_csv(&substitutions);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
}
