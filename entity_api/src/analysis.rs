//! CRUD operations for the append-only analyses table.

use super::error::Error;
use entity::analyses::{ActiveModel, Column, Entity, Model};
use entity::scoring_path::ScoringPath;
use entity::{recordings, Id};
use log::*;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, JoinType, QueryOrder, QuerySelect,
    TryIntoModel,
};

/// Scores and text of one analysis run, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub recording_id: Id,
    pub fluidity_score: i32,
    pub vocabulary_score: i32,
    pub grammar_score: i32,
    pub rhythm_score: i32,
    pub overall_score: i32,
    pub substitutions: serde_json::Value,
    pub feedback: Option<String>,
    pub scoring_path: ScoringPath,
}

/// Appends a new analysis row for a recording
pub async fn create(db: &DatabaseConnection, analysis: NewAnalysis) -> Result<Model, Error> {
    debug!(
        "Creating new {} analysis for recording: {}",
        analysis.scoring_path, analysis.recording_id
    );

    let active_model = ActiveModel {
        recording_id: Set(analysis.recording_id),
        fluidity_score: Set(analysis.fluidity_score),
        vocabulary_score: Set(analysis.vocabulary_score),
        grammar_score: Set(analysis.grammar_score),
        rhythm_score: Set(analysis.rhythm_score),
        overall_score: Set(analysis.overall_score),
        substitutions: Set(analysis.substitutions),
        feedback: Set(analysis.feedback),
        scoring_path: Set(analysis.scoring_path),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

/// Finds the analysis history of a recording, newest first
pub async fn find_by_recording_id(
    db: &DatabaseConnection,
    recording_id: Id,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::RecordingId.eq(recording_id))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Finds every analysis of every recording owned by a user, oldest first
pub async fn find_by_user_id(db: &DatabaseConnection, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .join(JoinType::InnerJoin, entity::analyses::Relation::Recordings.def())
        .filter(recordings::Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
