use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::response::progress::ProgressResponse;
use crate::{AppState, Error};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::progress as ProgressApi;
use domain::Id;
use log::*;
use service::config::ApiVersion;

/// GET the speaking progress of a user across all of their recordings.
#[utoipa::path(
    get,
    path = "/users/{id}/progress",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "User id whose progress to compute")
    ),
    responses(
        (status = 200, description = "Successfully computed the user's progress", body = ProgressResponse),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET progress of user: {id}");

    let report = ProgressApi::for_user(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        ProgressResponse::from(report),
    )))
}
