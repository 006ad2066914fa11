use domain::vocabulary::store::DEFAULT_SYNC_CATEGORY;
use domain::vocabulary::{seed, DbVocabularyRepository, VocabularyStore};
use log::{error, info};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Seeding vocabulary [{}]...", config.database_url());

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let store = match VocabularyStore::new(Arc::new(DbVocabularyRepository::new(db)), None) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to build the vocabulary store: {e}");
            std::process::exit(1);
        }
    };

    match store
        .ingest(seed::base_vocabulary(), DEFAULT_SYNC_CATEGORY)
        .await
    {
        Ok(report) => info!(
            "Base vocabulary seeded: {} entries, {} new, {} added",
            report.candidates, report.unique, report.added
        ),
        Err(e) => {
            error!("Failed to seed the base vocabulary: {e}");
            std::process::exit(1);
        }
    }
}
