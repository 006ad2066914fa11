use crate::{controller::health_check_controller, params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};

use crate::controller::{
    analysis_controller, progress_controller, recording_controller, vocabulary_controller,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Eloquence Platform API"
        ),
        paths(
            analysis_controller::analyze,
            health_check_controller::health_check,
            progress_controller::read,
            recording_controller::analyses,
            vocabulary_controller::sync,
            vocabulary_controller::refresh,
            vocabulary_controller::suggest,
            vocabulary_controller::export,
        ),
        components(
            schemas(
                domain::analyses::Model,
                domain::recordings::Model,
                domain::scoring_path::ScoringPath,
                params::analysis::AnalyzeParams,
                params::vocabulary::SyncParams,
                params::vocabulary::SuggestionParams,
                params::vocabulary::SubstitutionParams,
                response::analysis::AnalyzeResponse,
                response::analysis::AnalysisBody,
                response::analysis::MetricResponse,
                response::analysis::ReplacementResponse,
                response::progress::ProgressResponse,
                response::progress::TermFrequencyResponse,
                response::vocabulary::SyncResponse,
                response::vocabulary::RefreshResponse,
                response::vocabulary::SuggestionResponse,
            )
        ),
        tags(
            (name = "eloquence_platform", description = "Spoken French eloquence scoring API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(analysis_routes(app_state.clone()))
        .merge(health_routes())
        .merge(progress_routes(app_state.clone()))
        .merge(recording_routes(app_state.clone()))
        .merge(vocabulary_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn analysis_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analysis_controller::analyze))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn progress_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/users/{id}/progress", get(progress_controller::read))
        .with_state(app_state)
}

fn recording_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/recordings/{id}/analyses",
            get(recording_controller::analyses),
        )
        .with_state(app_state)
}

fn vocabulary_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/vocabulary/sync", post(vocabulary_controller::sync))
        .route("/vocabulary/refresh", post(vocabulary_controller::refresh))
        .route("/vocabulary/suggestions", post(vocabulary_controller::suggest))
        .route("/vocabulary/export", post(vocabulary_controller::export))
        .with_state(app_state)
}
