//! SeaORM Entity for analyses table.
//! Append-only: every analysis run of a recording adds a row, older rows stay
//! as history.

use crate::scoring_path::ScoringPath;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::analyses::Model)]
#[sea_orm(schema_name = "eloquence", table_name = "analyses")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    #[schema(value_type = Uuid)]
    pub recording_id: Id,

    pub fluidity_score: i32,

    pub vocabulary_score: i32,

    pub grammar_score: i32,

    pub rhythm_score: i32,

    /// Weighted combination of the four metric scores
    pub overall_score: i32,

    /// Serialized list of substitutions suggested for this run
    #[schema(value_type = Object)]
    pub substitutions: Json,

    #[sea_orm(column_type = "Text")]
    pub feedback: Option<String>,

    /// Whether the scores came from the language model or the heuristic
    pub scoring_path: ScoringPath,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recordings::Entity",
        from = "Column::RecordingId",
        to = "super::recordings::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Recordings,
}

impl Related<super::recordings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recordings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
