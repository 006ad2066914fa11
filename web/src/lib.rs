use axum::http::{header, HeaderValue, Method};
use domain::orchestrator::ScoringOrchestrator;
use domain::vocabulary::VocabularyStore;
use log::*;
use sea_orm::DatabaseConnection;
use service::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod controller;
mod error;
mod extractors;
mod params;
mod response;
pub mod router;

pub use error::{Error, Result};

/// Web-level state shared by every request handler: the infrastructure
/// handles from `service` plus the long-lived pipeline collaborators.
#[derive(Clone)]
pub struct AppState {
    pub service_state: service::AppState,
    pub orchestrator: Arc<ScoringOrchestrator>,
}

impl AppState {
    pub fn new(service_state: service::AppState, orchestrator: Arc<ScoringOrchestrator>) -> Self {
        Self {
            service_state,
            orchestrator,
        }
    }

    pub fn db_conn_ref(&self) -> &DatabaseConnection {
        self.service_state.db_conn_ref()
    }

    pub fn config(&self) -> &Config {
        &self.service_state.config
    }

    pub fn vocabulary(&self) -> &Arc<VocabularyStore> {
        self.orchestrator.vocabulary()
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config().clone();
    let interface = config.interface.as_deref().unwrap_or("127.0.0.1");
    let host = format!("{interface}:{}", config.port);

    info!(
        "Starting eloquence API server ({}, API version {}) on {host}",
        config.runtime_env(),
        config.api_version()
    );

    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origins(&config))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-version"),
        ]);

    let listener = TcpListener::bind(&host).await?;
    let app = router::define_routes(app_state).layer(cors_layer);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn allowed_origins(config: &Config) -> Vec<HeaderValue> {
    config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
