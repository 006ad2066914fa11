//! CRUD operations for recordings table.

use super::error::{EntityApiErrorKind, Error};
use entity::recordings::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, TryIntoModel,
};

/// Creates a new recording for a user
pub async fn create(
    db: &DatabaseConnection,
    user_id: Id,
    audio_path: String,
    duration_seconds: i32,
) -> Result<Model, Error> {
    if duration_seconds < 0 {
        return Err(Error::new(EntityApiErrorKind::ValidationError));
    }

    debug!("Creating new recording for user: {user_id}");

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        user_id: Set(user_id),
        audio_path: Set(audio_path),
        duration_seconds: Set(duration_seconds),
        transcript: Set(None),
        eloquence_score: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

/// Attaches the transcript and overall score to a recording.
///
/// The transcript is written once: a recording that already carries a
/// different transcript is rejected with `ValidationError`. The score is
/// always replaced by the latest analysis.
pub async fn attach_transcript(
    db: &DatabaseConnection,
    id: Id,
    transcript: String,
    eloquence_score: i32,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;

    if let Some(current) = existing.transcript.as_ref() {
        if *current != transcript {
            warn!("Refusing to overwrite the transcript of recording {id}");
            return Err(Error::new(EntityApiErrorKind::ValidationError));
        }
    }

    debug!("Attaching transcript and score {eloquence_score} to recording: {id}");

    let active_model = ActiveModel {
        id: Unchanged(existing.id),
        user_id: Unchanged(existing.user_id),
        audio_path: Unchanged(existing.audio_path),
        duration_seconds: Unchanged(existing.duration_seconds),
        transcript: Set(Some(transcript)),
        eloquence_score: Set(Some(eloquence_score)),
        created_at: Unchanged(existing.created_at),
        updated_at: Set(chrono::Utc::now().into()),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

/// Finds a recording by ID
pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::new(EntityApiErrorKind::RecordNotFound))
}

/// Finds all recordings of a user, oldest first
pub async fn find_by_user_id(db: &DatabaseConnection, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
