use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique constraint closes the race between concurrent ingestions
        // that both pass the existence check for the same pair.
        let create_vocabulary_sql = r#"
            CREATE TABLE IF NOT EXISTS eloquence.vocabulary_entries (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                original TEXT NOT NULL,
                improved TEXT NOT NULL,
                reason TEXT NOT NULL DEFAULT '',
                category VARCHAR(64) NOT NULL DEFAULT 'noun',
                level VARCHAR(32) NOT NULL DEFAULT 'courant',
                usage_example TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

                CONSTRAINT vocabulary_entries_pair_unique UNIQUE(original, improved)
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_vocabulary_sql)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_vocabulary_entries_original
                 ON eloquence.vocabulary_entries(lower(original))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS eloquence.vocabulary_entries")
            .await?;

        Ok(())
    }
}
