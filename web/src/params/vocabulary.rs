use domain::analysis::Substitution;
use domain::vocabulary::store::DEFAULT_SYNC_CATEGORY;
use serde::Deserialize;
use utoipa::ToSchema;

fn default_category() -> String {
    DEFAULT_SYNC_CATEGORY.to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SyncParams {
    /// Location of a `motOriginal,motAmeliore,raison[,categorie,niveau]` file.
    pub(crate) file_url: String,
    #[serde(default = "default_category")]
    #[schema(default = "général")]
    pub(crate) category: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SuggestionParams {
    pub(crate) original: String,
    pub(crate) improved: String,
    #[serde(default)]
    pub(crate) reason: String,
}

/// One suggested replacement, as returned by the analyze endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SubstitutionParams {
    pub(crate) original: String,
    pub(crate) suggestion: String,
    #[serde(default, alias = "raison")]
    pub(crate) reason: String,
    #[serde(default)]
    pub(crate) category: Option<String>,
}

impl From<SubstitutionParams> for Substitution {
    fn from(params: SubstitutionParams) -> Self {
        Substitution {
            original: params.original,
            suggestion: params.suggestion,
            reason: params.reason,
            category: params.category,
        }
    }
}
