use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which analysis path produced a set of scores.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    EnumIter,
    Deserialize,
    Default,
    Serialize,
    DeriveActiveEnum,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scoring_path")]
pub enum ScoringPath {
    /// Scores returned by the language-model analysis
    #[sea_orm(string_value = "primary")]
    #[default]
    Primary,
    /// Scores computed locally by the heuristic analyzer
    #[sea_orm(string_value = "fallback")]
    Fallback,
}

impl std::fmt::Display for ScoringPath {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringPath::Primary => write!(fmt, "primary"),
            ScoringPath::Fallback => write!(fmt, "fallback"),
        }
    }
}
