//! Schema setup for the todolists tables
//!
//! Cascade deletion of a list's todos is owned here, by the foreign key,
//! not by repository code.

use sqlx::PgPool;

use crate::error::Result;

/// Create the lists and todos tables if they don't exist.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running todolists migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id BIGSERIAL PRIMARY KEY,
            list_id BIGINT NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("todolists migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_list ON todos(list_id)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_todos_pending ON todos(list_id) WHERE NOT completed",
    )
    .execute(pool)
    .await?;

    Ok(())
}
