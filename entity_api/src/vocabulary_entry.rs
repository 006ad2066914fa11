//! Operations for vocabulary_entries table.
//!
//! Rows are only ever inserted or listed. Deduplication on (original, improved)
//! is enforced by a unique constraint; callers pre-filter with
//! [`find_existing_pairs`] so a constraint hit means a concurrent writer won.

use super::error::Error;
use entity::vocabulary_entries::{ActiveModel, Column, Entity, Model};
use log::*;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, Condition, DatabaseConnection, QueryOrder,
};
use std::collections::HashSet;

/// A vocabulary entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub original: String,
    pub improved: String,
    pub reason: String,
    pub category: String,
    pub level: String,
    pub usage_example: Option<String>,
}

impl NewEntry {
    fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            original: Set(self.original),
            improved: Set(self.improved),
            reason: Set(self.reason),
            category: Set(self.category),
            level: Set(self.level),
            usage_example: Set(self.usage_example),
            created_at: Set(now),
            ..Default::default()
        }
    }
}

/// Inserts one batch of entries in a single statement and returns how many
/// rows were written. The whole batch fails if any row violates the
/// (original, improved) constraint.
pub async fn insert_batch(db: &DatabaseConnection, entries: Vec<NewEntry>) -> Result<u64, Error> {
    if entries.is_empty() {
        return Ok(0);
    }

    debug!("Inserting a batch of {} vocabulary entries", entries.len());

    let now: DateTimeWithTimeZone = chrono::Utc::now().into();
    let models = entries
        .into_iter()
        .map(|entry| entry.into_active_model(now))
        .collect::<Vec<_>>();

    Ok(Entity::insert_many(models).exec_without_returning(db).await?)
}

/// Returns the subset of `pairs` already present in storage, in one query.
pub async fn find_existing_pairs(
    db: &DatabaseConnection,
    pairs: &[(String, String)],
) -> Result<HashSet<(String, String)>, Error> {
    if pairs.is_empty() {
        return Ok(HashSet::new());
    }

    let condition = pairs
        .iter()
        .fold(Condition::any(), |condition, (original, improved)| {
            condition.add(
                Condition::all()
                    .add(Column::Original.eq(original.as_str()))
                    .add(Column::Improved.eq(improved.as_str())),
            )
        });

    let existing = Entity::find().filter(condition).all(db).await?;

    Ok(existing
        .into_iter()
        .map(|model| (model.original, model.improved))
        .collect())
}

/// Lists every stored entry, oldest first
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
