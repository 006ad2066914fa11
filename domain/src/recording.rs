use crate::error::Error;
use crate::{analyses, Id};
use entity_api::{analysis, recording};
use sea_orm::DatabaseConnection;

/// Analysis history of a recording, newest first. Fails with an entity
/// `NotFound` error when the recording does not exist.
pub async fn analysis_history(
    db: &DatabaseConnection,
    recording_id: Id,
) -> Result<Vec<analyses::Model>, Error> {
    recording::find_by_id(db, recording_id).await?;
    Ok(analysis::find_by_recording_id(db, recording_id).await?)
}
