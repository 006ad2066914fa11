use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE TYPE eloquence.scoring_path AS ENUM (
                    'primary',
                    'fallback'
                )",
            )
            .await?;

        let create_recordings_sql = r#"
            CREATE TABLE IF NOT EXISTS eloquence.recordings (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL,
                audio_path TEXT NOT NULL,
                duration_seconds INTEGER NOT NULL CHECK (duration_seconds >= 0),
                transcript TEXT,
                eloquence_score INTEGER CHECK (eloquence_score BETWEEN 0 AND 100),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_recordings_sql)
            .await?;

        // Append-only: one row per analysis run, never updated
        let create_analyses_sql = r#"
            CREATE TABLE IF NOT EXISTS eloquence.analyses (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                recording_id UUID NOT NULL
                    REFERENCES eloquence.recordings(id) ON DELETE CASCADE,
                fluidity_score INTEGER NOT NULL CHECK (fluidity_score BETWEEN 0 AND 100),
                vocabulary_score INTEGER NOT NULL CHECK (vocabulary_score BETWEEN 0 AND 100),
                grammar_score INTEGER NOT NULL CHECK (grammar_score BETWEEN 0 AND 100),
                rhythm_score INTEGER NOT NULL CHECK (rhythm_score BETWEEN 0 AND 100),
                overall_score INTEGER NOT NULL CHECK (overall_score BETWEEN 0 AND 100),
                substitutions JSONB NOT NULL DEFAULT '[]'::jsonb,
                feedback TEXT,
                scoring_path eloquence.scoring_path NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_analyses_sql)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_recordings_user
                 ON eloquence.recordings(user_id, created_at)",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS idx_analyses_recording
                 ON eloquence.analyses(recording_id, created_at)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS eloquence.analyses")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS eloquence.recordings")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS eloquence.scoring_path")
            .await?;

        Ok(())
    }
}
