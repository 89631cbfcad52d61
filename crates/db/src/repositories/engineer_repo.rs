//! Repository for the `engineers` table.

use budget_core::types::DbId;
use sqlx::PgPool;

use crate::models::engineer::{CreateEngineer, Engineer, UpdateEngineer};

const COLUMNS: &str = "id, name, position, hourly_rate, created_at, updated_at";

/// Provides CRUD operations for engineers.
pub struct EngineerRepo;

impl EngineerRepo {
    /// Insert a new engineer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEngineer) -> Result<Engineer, sqlx::Error> {
        let query = format!(
            "INSERT INTO engineers (name, position, hourly_rate)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Engineer>(&query)
            .bind(input.name.trim())
            .bind(input.position.trim())
            .bind(input.hourly_rate)
            .fetch_one(pool)
            .await
    }

    /// Find an engineer by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Engineer>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM engineers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Engineer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all engineers alphabetically. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Engineer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM engineers WHERE deleted_at IS NULL ORDER BY name, id"
        );
        sqlx::query_as::<_, Engineer>(&query).fetch_all(pool).await
    }

    /// Update an engineer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEngineer,
    ) -> Result<Option<Engineer>, sqlx::Error> {
        let query = format!(
            "UPDATE engineers SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                hourly_rate = COALESCE($4, hourly_rate)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Engineer>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.position.as_deref().map(str::trim))
            .bind(input.hourly_rate)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an engineer. Returns `true` if a row was marked deleted.
    ///
    /// Existing work logs keep their `engineer_id`; dashboards for projects
    /// with ACTUAL hours by this engineer will report a dangling reference.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE engineers SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
