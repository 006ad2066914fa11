//! SeaORM Entity for vocabulary_entries table.
//! (original, improved) is unique at the storage layer; entries are never
//! updated in place.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::vocabulary_entries::Model)]
#[sea_orm(schema_name = "eloquence", table_name = "vocabulary_entries")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    /// Term as spoken
    pub original: String,

    /// Suggested replacement
    pub improved: String,

    #[sea_orm(column_type = "Text")]
    pub reason: String,

    /// Category label (grammatical category or the label given at sync time)
    pub category: String,

    /// Language register, e.g. "courant" or "soutenu"
    pub level: String,

    #[sea_orm(column_type = "Text")]
    pub usage_example: Option<String>,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
