use domain::vocabulary::store::SuggestionReport;
use domain::vocabulary::SyncReport;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub(crate) struct SyncResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
    /// Entries newly written to the vocabulary table.
    pub(crate) added: u64,
    /// Valid entries found in the file.
    pub(crate) total: usize,
}

impl From<SyncReport> for SyncResponse {
    fn from(report: SyncReport) -> Self {
        Self {
            success: report.success,
            message: report.message,
            added: report.added,
            total: report.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub(crate) struct RefreshResponse {
    /// Distinct originals in the rebuilt lookup.
    pub(crate) entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub(crate) struct SuggestionResponse {
    /// False when the pair was already stored.
    pub(crate) added: bool,
    pub(crate) category: String,
}

impl From<SuggestionReport> for SuggestionResponse {
    fn from(report: SuggestionReport) -> Self {
        Self {
            added: report.added,
            category: report.category.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::vocabulary_category::VocabularyCategory;
    use serde_json::json;

    #[test]
    fn sync_response_keeps_report_fields() {
        let response = SyncResponse::from(SyncReport {
            success: true,
            message: "All entries already exist in database".to_string(),
            added: 0,
            total: 12,
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "success": true,
                "message": "All entries already exist in database",
                "added": 0,
                "total": 12
            })
        );
    }

    #[test]
    fn suggestion_response_uses_category_label() {
        let response = SuggestionResponse::from(SuggestionReport {
            added: true,
            category: VocabularyCategory::Adverb,
        });
        assert_eq!(response.category, "adverb");
    }
}
