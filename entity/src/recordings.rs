//! SeaORM Entity for recordings table.
//! One captured audio submission; the transcript and eloquence score are
//! attached once after analysis.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::recordings::Model)]
#[sea_orm(schema_name = "eloquence", table_name = "recordings")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    #[schema(value_type = Uuid)]
    pub user_id: Id,

    /// Path of the audio file inside the recordings bucket
    pub audio_path: String,

    /// Duration of the recording in seconds
    pub duration_seconds: i32,

    /// Transcript text, written once
    #[sea_orm(column_type = "Text")]
    pub transcript: Option<String>,

    /// Overall eloquence score (0-100) of the latest analysis
    pub eloquence_score: Option<i32>,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::analyses::Entity")]
    Analyses,
}

impl Related<super::analyses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Analyses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
