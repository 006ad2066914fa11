use domain::orchestrator::ScoringOrchestrator;
use domain::vocabulary::{DbVocabularyRepository, VocabularyStore};
use log::*;
use migration::{Migrator, MigratorTrait};
use service::{config::Config, logging::Logger, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting up eloquence platform [{}]", config.runtime_env());

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(db.as_ref(), None).await {
        error!("Failed to apply database migrations: {e}");
        std::process::exit(1);
    }

    let repository = Arc::new(DbVocabularyRepository::new(Arc::clone(&db)));
    let vocabulary = match VocabularyStore::new(repository, config.vocabulary_dir()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to build the vocabulary store: {e}");
            std::process::exit(1);
        }
    };

    // An empty lookup still lets the pipeline score recordings.
    match vocabulary.refresh().await {
        Ok(entries) => info!("Vocabulary lookup loaded with {entries} entries"),
        Err(e) => warn!("Starting with an empty vocabulary lookup: {e}"),
    }

    let orchestrator = match ScoringOrchestrator::from_config(&config, Arc::clone(&db), vocabulary)
    {
        Ok(orchestrator) => Arc::new(orchestrator),
        Err(e) => {
            error!("Failed to configure the scoring pipeline: {e}");
            std::process::exit(1);
        }
    };

    let app_state = web::AppState::new(AppState::new(config, &db), orchestrator);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped with an error: {e}");
        std::process::exit(1);
    }
}
