//! Vocabulary ingestion and the shared lookup cache.
//!
//! Writes go through a [`VocabularyRepository`]; reads during analysis go
//! through an immutable [`VocabularyLookup`] snapshot that is replaced
//! wholesale on every [`VocabularyStore::refresh`].

use super::category;
use super::parser::{self, ParsedEntry, DEFAULT_LEVEL};
use super::{LookupEntry, VocabularyLookup};
use crate::analysis::Substitution;
use crate::error::{
    DomainErrorKind, EntityErrorKind, Error, ExternalErrorKind, InternalErrorKind,
};
use crate::vocabulary_category::VocabularyCategory;
use crate::vocabulary_entries;
use async_trait::async_trait;
use entity_api::vocabulary_entry::{self, NewEntry};
use log::*;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Rows written per insert statement.
pub const BATCH_SIZE: usize = 100;

/// Category label applied when a sync request does not name one.
pub const DEFAULT_SYNC_CATEGORY: &str = "général";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const EXPORT_HEADER: &str = "motOriginal,motAmeliore,raison";

/// Storage seam for vocabulary entries.
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Returns the subset of `pairs` already stored, in one round trip.
    async fn existing_pairs(
        &self,
        pairs: &[(String, String)],
    ) -> Result<HashSet<(String, String)>, Error>;

    /// Inserts all rows or none. Returns the number of rows written.
    async fn insert_batch(&self, entries: Vec<NewEntry>) -> Result<u64, Error>;

    async fn all_entries(&self) -> Result<Vec<vocabulary_entries::Model>, Error>;
}

pub struct DbVocabularyRepository {
    db: Arc<DatabaseConnection>,
}

impl DbVocabularyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VocabularyRepository for DbVocabularyRepository {
    async fn existing_pairs(
        &self,
        pairs: &[(String, String)],
    ) -> Result<HashSet<(String, String)>, Error> {
        Ok(vocabulary_entry::find_existing_pairs(&self.db, pairs).await?)
    }

    async fn insert_batch(&self, entries: Vec<NewEntry>) -> Result<u64, Error> {
        Ok(vocabulary_entry::insert_batch(&self.db, entries).await?)
    }

    async fn all_entries(&self) -> Result<Vec<vocabulary_entries::Model>, Error> {
        Ok(vocabulary_entry::find_all(&self.db).await?)
    }
}

/// Outcome of a file sync, rendered as-is to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    pub added: u64,
    pub total: usize,
}

/// Outcome of deduplicating and inserting a set of candidate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Distinct candidate pairs.
    pub candidates: usize,
    /// Candidates not already stored.
    pub unique: usize,
    /// Rows actually written; lower than `unique` when a batch failed.
    pub added: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionReport {
    pub added: bool,
    pub category: VocabularyCategory,
}

pub struct VocabularyStore {
    repository: Arc<dyn VocabularyRepository>,
    http_client: reqwest::Client,
    vocabulary_dir: Option<PathBuf>,
    lookup: RwLock<Arc<VocabularyLookup>>,
}

impl VocabularyStore {
    pub fn new(
        repository: Arc<dyn VocabularyRepository>,
        vocabulary_dir: Option<PathBuf>,
    ) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()?;

        Ok(Self {
            repository,
            http_client,
            vocabulary_dir,
            lookup: RwLock::new(Arc::new(VocabularyLookup::default())),
        })
    }

    /// Current lookup snapshot. Callers keep using the snapshot they got even
    /// if a refresh publishes a newer one meanwhile.
    pub fn lookup(&self) -> Arc<VocabularyLookup> {
        let guard = self
            .lookup
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuilds the lookup from every stored entry and every `*.csv` file in
    /// the vocabulary directory, then replaces the current snapshot.
    /// Returns the number of distinct originals in the new lookup.
    pub async fn refresh(&self) -> Result<usize, Error> {
        let stored = self.repository.all_entries().await?;
        let mut sources: Vec<(String, LookupEntry)> = stored
            .into_iter()
            .map(|entry| {
                (
                    entry.original,
                    LookupEntry {
                        suggestion: entry.improved,
                        reason: entry.reason,
                        category: Some(entry.category),
                    },
                )
            })
            .collect();

        if let Some(dir) = &self.vocabulary_dir {
            for entry in read_vocabulary_dir(dir).await? {
                sources.push((
                    entry.original,
                    LookupEntry {
                        suggestion: entry.improved,
                        reason: entry.reason,
                        category: entry.category,
                    },
                ));
            }
        }

        let lookup = Arc::new(VocabularyLookup::from_entries(sources));
        let size = lookup.len();
        {
            let mut guard = self
                .lookup
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = lookup;
        }

        info!("Vocabulary lookup refreshed with {size} terms");
        Ok(size)
    }

    /// Downloads a vocabulary file, stores its new entries and refreshes the
    /// lookup when anything was added.
    pub async fn sync_from_url(&self, file_url: &str, category: &str) -> Result<SyncReport, Error> {
        debug!("Syncing vocabulary file {file_url} as category {category}");

        let response = self.http_client.get(file_url).send().await.map_err(|e| {
            warn!("Failed to download vocabulary file {file_url}: {e:?}");
            Error::from(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Vocabulary file download returned {status}");
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Provider(format!(
                    "HTTP error! status: {}",
                    status.as_u16()
                ))),
            });
        }

        let content = response.text().await?;
        let parsed = parser::parse(&content)?;
        let total = parsed.entries.len();

        if total == 0 {
            return Ok(SyncReport {
                success: false,
                message: "No valid entries found in CSV file".to_string(),
                added: 0,
                total: 0,
            });
        }

        let report = self.ingest(parsed.entries, category).await?;

        if report.unique == 0 {
            return Ok(SyncReport {
                success: true,
                message: "All entries already exist in database".to_string(),
                added: 0,
                total,
            });
        }

        if report.added > 0 {
            self.refresh_after_write().await;
        }

        Ok(SyncReport {
            success: true,
            message: "Successfully processed vocabulary file".to_string(),
            added: report.added,
            total,
        })
    }

    /// Skips pairs that are duplicated within `entries` or already stored,
    /// then inserts the rest in batches of [`BATCH_SIZE`]. A failed batch is
    /// logged and the remaining batches still run.
    pub async fn ingest(
        &self,
        entries: Vec<ParsedEntry>,
        default_category: &str,
    ) -> Result<IngestReport, Error> {
        let mut seen = HashSet::new();
        let candidates: Vec<ParsedEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert((entry.original.clone(), entry.improved.clone())))
            .collect();

        let pairs: Vec<(String, String)> = candidates
            .iter()
            .map(|entry| (entry.original.clone(), entry.improved.clone()))
            .collect();
        let existing = self.repository.existing_pairs(&pairs).await?;

        let unique: Vec<NewEntry> = candidates
            .iter()
            .filter(|entry| !existing.contains(&(entry.original.clone(), entry.improved.clone())))
            .map(|entry| NewEntry {
                original: entry.original.clone(),
                improved: entry.improved.clone(),
                reason: entry.reason.clone(),
                category: normalize_category(
                    entry.category.as_deref().unwrap_or(default_category),
                ),
                level: entry.level.clone(),
                usage_example: None,
            })
            .collect();

        let mut report = IngestReport {
            candidates: candidates.len(),
            unique: unique.len(),
            added: 0,
        };

        for (index, batch) in unique.chunks(BATCH_SIZE).enumerate() {
            match self.repository.insert_batch(batch.to_vec()).await {
                Ok(written) => report.added += written,
                Err(e) => warn!(
                    "Vocabulary batch {} ({} rows) was not inserted: {e}",
                    index + 1,
                    batch.len()
                ),
            }
        }

        info!(
            "Vocabulary ingestion: {} candidates, {} new, {} added",
            report.candidates, report.unique, report.added
        );
        Ok(report)
    }

    /// Stores a single user-suggested replacement with an inferred category.
    pub async fn submit_suggestion(
        &self,
        original: &str,
        improved: &str,
        reason: &str,
    ) -> Result<SuggestionReport, Error> {
        let original = original.trim();
        let improved = improved.trim();
        if original.is_empty() || improved.is_empty() {
            return Err(Error {
                source: Some("original and improved terms are required".into()),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                    EntityErrorKind::Invalid,
                )),
            });
        }

        let category = category::infer(original);
        let entry = ParsedEntry {
            original: original.to_string(),
            improved: improved.to_string(),
            reason: reason.trim().to_string(),
            category: Some(category.to_string()),
            level: DEFAULT_LEVEL.to_string(),
        };

        let report = self.ingest(vec![entry], category.as_str()).await?;
        let added = report.added > 0;
        if added {
            self.refresh_after_write().await;
        }

        Ok(SuggestionReport { added, category })
    }

    /// Renders substitutions as a `motOriginal,motAmeliore,raison` file.
    pub fn export_csv(substitutions: &[Substitution]) -> String {
        let mut csv = String::from(EXPORT_HEADER);
        for substitution in substitutions {
            csv.push_str("\r\n");
            csv.push_str(&csv_field(&substitution.original));
            csv.push(',');
            csv.push_str(&csv_field(&substitution.suggestion));
            csv.push(',');
            csv.push_str(&csv_field(&substitution.reason));
        }
        csv
    }

    async fn refresh_after_write(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Vocabulary stored but lookup refresh failed: {e}");
        }
    }
}

/// Parses every `*.csv` file in `dir`, in file name order. Malformed files
/// are logged and skipped.
async fn read_vocabulary_dir(dir: &Path) -> Result<Vec<ParsedEntry>, Error> {
    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(|e| {
        warn!("Unable to list vocabulary directory {}: {e}", dir.display());
        Error {
            source: Some(Box::new(e)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let mut listed = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => listed.push(Ok(entry.path())),
            Ok(None) => break,
            Err(e) => {
                listed.push(Err(e));
                break;
            }
        }
    }
    let paths = csv_paths(dir, listed);

    let mut entries = Vec::new();
    for path in paths {
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping unreadable vocabulary file {}: {e}", path.display());
                continue;
            }
        };
        match parser::parse(&content) {
            Ok(parsed) => entries.extend(parsed.entries),
            Err(_) => warn!("Skipping malformed vocabulary file {}", path.display()),
        }
    }

    Ok(entries)
}

/// Sorted `*.csv` paths from a directory listing. A listing error is logged
/// and ends the listing with the paths gathered so far.
fn csv_paths(dir: &Path, listed: Vec<std::io::Result<PathBuf>>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for path in listed {
        match path {
            Ok(path) => {
                if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
                    paths.push(path);
                }
            }
            Err(e) => {
                warn!("Listing of vocabulary directory {} stopped early: {e}", dir.display());
                break;
            }
        }
    }
    paths.sort();
    paths
}

/// Stores known categories under their canonical English label, whatever
/// language the source used. Free-form labels such as `général` are kept.
fn normalize_category(label: &str) -> String {
    label
        .parse::<VocabularyCategory>()
        .map(|category| category.as_str().to_string())
        .unwrap_or_else(|_| label.trim().to_string())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryRepository;
    use mockito::Server;

    fn parsed(original: &str, improved: &str) -> ParsedEntry {
        ParsedEntry {
            original: original.to_string(),
            improved: improved.to_string(),
            reason: "Plus précis".to_string(),
            category: None,
            level: DEFAULT_LEVEL.to_string(),
        }
    }

    fn store(repository: Arc<InMemoryRepository>) -> VocabularyStore {
        VocabularyStore::new(repository, None).unwrap()
    }

    #[tokio::test]
    async fn ingest_skips_existing_pairs() {
        let repository = Arc::new(InMemoryRepository::with_rows(&[("bon", "excellent")]));
        let store = store(repository.clone());

        let report = store
            .ingest(vec![parsed("bon", "excellent")], DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap();

        assert_eq!(report.added, 0);
        assert_eq!(report.unique, 0);
        assert_eq!(repository.row_count(), 1);
    }

    #[tokio::test]
    async fn ingest_collapses_duplicates_within_one_file() {
        let repository = Arc::new(InMemoryRepository::default());
        let store = store(repository.clone());

        let report = store
            .ingest(
                vec![
                    parsed("bon", "excellent"),
                    parsed("bon", "excellent"),
                    parsed("bon", "remarquable"),
                ],
                DEFAULT_SYNC_CATEGORY,
            )
            .await
            .unwrap();

        assert_eq!(report.candidates, 2);
        assert_eq!(report.added, 2);
        assert_eq!(repository.row_count(), 2);
    }

    #[tokio::test]
    async fn ingest_inserts_in_batches_and_survives_a_failed_batch() {
        let repository = Arc::new(InMemoryRepository {
            failing_batch: Some(2),
            ..Default::default()
        });
        let store = store(repository.clone());
        let entries = (0..250)
            .map(|i| parsed(&format!("mot{i}"), &format!("terme{i}")))
            .collect();

        let report = store.ingest(entries, DEFAULT_SYNC_CATEGORY).await.unwrap();

        assert_eq!(*repository.batch_calls.lock().unwrap(), 3);
        assert_eq!(report.unique, 250);
        assert_eq!(report.added, 150);
        assert_eq!(repository.row_count(), 150);
    }

    #[tokio::test]
    async fn ingest_prefers_row_category_over_default() {
        let repository = Arc::new(InMemoryRepository::default());
        let store = store(repository.clone());
        let mut with_category = parsed("bon", "excellent");
        with_category.category = Some("adjectif".to_string());

        store
            .ingest(vec![with_category, parsed("truc", "objet")], "soutenu")
            .await
            .unwrap();

        let rows = repository.all_entries().await.unwrap();
        assert_eq!(rows[0].category, "adjective");
        assert_eq!(rows[1].category, "soutenu");
    }

    #[tokio::test]
    async fn refresh_replaces_the_lookup() {
        let repository = Arc::new(InMemoryRepository::with_rows(&[("bon", "excellent")]));
        let store = store(repository.clone());
        assert!(store.lookup().is_empty());

        assert_eq!(store.refresh().await.unwrap(), 1);
        let before = store.lookup();
        assert!(before.get("bon").is_some());

        repository.rows.lock().unwrap().clear();
        assert_eq!(store.refresh().await.unwrap(), 0);
        assert!(store.lookup().get("bon").is_none());
        // snapshots taken earlier are unaffected
        assert!(before.get("bon").is_some());
    }

    #[tokio::test]
    async fn refresh_reads_csv_files_from_the_vocabulary_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("base.csv"),
            "motOriginal,motAmeliore,raison\nbeau,splendide,Plus expressif\nbon,superbe,Autre\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.csv"), "mot,raison\nx,y\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "motOriginal,motAmeliore,raison\nvoir,observer,x\n").unwrap();

        let repository = Arc::new(InMemoryRepository::with_rows(&[("bon", "excellent")]));
        let store = VocabularyStore::new(repository, Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(store.refresh().await.unwrap(), 2);
        let lookup = store.lookup();
        assert_eq!(lookup.get("bon").unwrap().suggestion, "excellent");
        assert_eq!(lookup.get("beau").unwrap().suggestion, "splendide");
        assert!(lookup.get("voir").is_none());
    }

    #[tokio::test]
    async fn sync_from_url_adds_new_entries_and_refreshes() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/vocabulaire.csv")
            .with_status(200)
            .with_body(
                "motOriginal,motAmeliore,raison,niveau\n\
                 bon,excellent,Plus précis,courant\n\
                 ,vide,ligne invalide,courant\n\
                 truc,objet,Évite le familier,familier\n",
            )
            .create_async()
            .await;

        let repository = Arc::new(InMemoryRepository::with_rows(&[("bon", "excellent")]));
        let store = store(repository.clone());

        let report = store
            .sync_from_url(&format!("{}/vocabulaire.csv", server.url()), DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap();

        assert_eq!(
            report,
            SyncReport {
                success: true,
                message: "Successfully processed vocabulary file".to_string(),
                added: 1,
                total: 2,
            }
        );
        assert_eq!(store.lookup().get("truc").unwrap().suggestion, "objet");
    }

    #[tokio::test]
    async fn sync_from_url_reports_when_everything_exists() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/vocabulaire.csv")
            .with_status(200)
            .with_body("motOriginal,motAmeliore,raison\nbon,excellent,Plus précis\n")
            .create_async()
            .await;

        let repository = Arc::new(InMemoryRepository::with_rows(&[("bon", "excellent")]));
        let store = store(repository.clone());

        let report = store
            .sync_from_url(&format!("{}/vocabulaire.csv", server.url()), DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.added, 0);
        assert_eq!(report.message, "All entries already exist in database");
        assert_eq!(repository.row_count(), 1);
    }

    #[tokio::test]
    async fn sync_from_url_reports_files_without_valid_rows() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/vide.csv")
            .with_status(200)
            .with_body("motOriginal,motAmeliore,raison\n,excellent,x\n")
            .create_async()
            .await;

        let store = store(Arc::new(InMemoryRepository::default()));
        let report = store
            .sync_from_url(&format!("{}/vide.csv", server.url()), DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap();

        assert!(!report.success);
        assert_eq!(report.message, "No valid entries found in CSV file");
    }

    #[tokio::test]
    async fn sync_from_url_rejects_malformed_files() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/mauvais.csv")
            .with_status(200)
            .with_body("mot,remplacement\nbon,excellent\n")
            .create_async()
            .await;

        let store = store(Arc::new(InMemoryRepository::default()));
        let err = store
            .sync_from_url(&format!("{}/mauvais.csv", server.url()), DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap_err();

        assert_eq!(
            err.pipeline_kind(),
            Some(&crate::error::PipelineErrorKind::MalformedVocabularyFile)
        );
    }

    #[tokio::test]
    async fn sync_from_url_surfaces_http_errors() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/absent.csv")
            .with_status(404)
            .create_async()
            .await;

        let store = store(Arc::new(InMemoryRepository::default()));
        let err = store
            .sync_from_url(&format!("{}/absent.csv", server.url()), DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Provider(
                "HTTP error! status: 404".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn submit_suggestion_infers_category_and_skips_duplicates() {
        let repository = Arc::new(InMemoryRepository::default());
        let store = store(repository.clone());

        let first = store
            .submit_suggestion(" rapidement ", "promptement", "Plus soutenu")
            .await
            .unwrap();
        assert_eq!(
            first,
            SuggestionReport {
                added: true,
                category: VocabularyCategory::Adverb,
            }
        );
        assert!(store.lookup().get("rapidement").is_some());

        let again = store
            .submit_suggestion("rapidement", "promptement", "Plus soutenu")
            .await
            .unwrap();
        assert!(!again.added);
        assert_eq!(repository.row_count(), 1);
        assert_eq!(repository.all_entries().await.unwrap()[0].category, "adverb");
    }

    #[tokio::test]
    async fn submit_suggestion_requires_both_terms() {
        let store = store(Arc::new(InMemoryRepository::default()));
        let err = store.submit_suggestion("bon", "  ", "x").await.unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Invalid))
        );
    }

    #[test]
    fn export_csv_quotes_fields_that_need_it() {
        let substitutions = vec![
            Substitution {
                original: "bon".to_string(),
                suggestion: "excellent".to_string(),
                reason: "Plus précis".to_string(),
                category: None,
            },
            Substitution {
                original: "dire".to_string(),
                suggestion: "affirmer".to_string(),
                reason: "Plus \"fort\", plus net".to_string(),
                category: None,
            },
        ];

        assert_eq!(
            VocabularyStore::export_csv(&substitutions),
            "motOriginal,motAmeliore,raison\r\n\
             bon,excellent,Plus précis\r\n\
             dire,affirmer,\"Plus \"\"fort\"\", plus net\""
        );
    }

    #[test]
    fn exported_csv_parses_back_with_commas_intact() {
        let substitutions = vec![Substitution {
            original: "bien".to_string(),
            suggestion: "excellent".to_string(),
            reason: "Plus net, plus soutenu".to_string(),
            category: None,
        }];

        let reparsed = parser::parse(&VocabularyStore::export_csv(&substitutions)).unwrap();

        assert_eq!(reparsed.entries.len(), 1);
        assert_eq!(reparsed.entries[0].original, "bien");
        assert_eq!(reparsed.entries[0].improved, "excellent");
        assert_eq!(reparsed.entries[0].reason, "Plus net, plus soutenu");
    }

    #[tokio::test]
    async fn ingest_stores_french_and_english_categories_under_one_label() {
        let repository = Arc::new(InMemoryRepository::default());
        let store = store(repository.clone());

        let mut adjective = parsed("bon", "excellent");
        adjective.category = Some("adjectif".to_string());
        let mut verb = parsed("dire", "affirmer");
        verb.category = Some("Verbe".to_string());
        let untagged = parsed("truc", "objet");
        store
            .ingest(vec![adjective, verb, untagged], DEFAULT_SYNC_CATEGORY)
            .await
            .unwrap();
        store
            .submit_suggestion("rapide", "prompt", "Plus soutenu")
            .await
            .unwrap();

        let categories: Vec<(String, String)> = repository
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| (row.original.clone(), row.category.clone()))
            .collect();
        assert_eq!(
            categories,
            vec![
                ("bon".to_string(), "adjective".to_string()),
                ("dire".to_string(), "verb".to_string()),
                ("truc".to_string(), "général".to_string()),
                ("rapide".to_string(), "noun".to_string()),
            ]
        );
    }

    #[test]
    fn listing_error_keeps_the_csv_paths_read_before_it() {
        let dir = Path::new("/vocabulaire");
        let listed = vec![
            Ok(dir.join("b.csv")),
            Ok(dir.join("notes.txt")),
            Ok(dir.join("a.CSV")),
            Err(std::io::Error::other("disk unplugged")),
            Ok(dir.join("c.csv")),
        ];

        assert_eq!(
            csv_paths(dir, listed),
            vec![dir.join("a.CSV"), dir.join("b.csv")]
        );
    }
}
