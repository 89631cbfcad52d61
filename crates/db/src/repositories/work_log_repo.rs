//! Repository for the `work_logs` table.

use budget_core::kinds::KindId;
use budget_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_log::{CreateWorkLog, UpdateWorkLog, WorkLog, WorkLogListFilter};

const COLUMNS: &str = "id, engineer_id, project_id, hours, date, description, category, \
                       work_type_id, created_at, updated_at";

/// Provides CRUD and filtered listing for work logs.
pub struct WorkLogRepo;

impl WorkLogRepo {
    /// Insert a new work log, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWorkLog) -> Result<WorkLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_logs
                (engineer_id, project_id, hours, date, description, category, work_type_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(input.engineer_id)
            .bind(input.project_id)
            .bind(input.hours)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.work_type.id())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_logs WHERE id = $1");
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List work logs matching `filter`, most recent date first.
    ///
    /// The month bound is half-open: `date >= start AND date < end`.
    pub async fn list(
        pool: &PgPool,
        filter: &WorkLogListFilter,
    ) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_logs
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
               AND ($2::DATE IS NULL OR date >= $2)
               AND ($3::DATE IS NULL OR date < $3)
               AND ($4::SMALLINT IS NULL OR work_type_id = $4)
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(filter.project_id)
            .bind(filter.month.map(|m| m.start))
            .bind(filter.month.map(|m| m.end))
            .bind(filter.work_type.map(KindId::from))
            .fetch_all(pool)
            .await
    }

    /// Update a work log. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkLog,
    ) -> Result<Option<WorkLog>, sqlx::Error> {
        let query = format!(
            "UPDATE work_logs SET
                engineer_id = COALESCE($2, engineer_id),
                project_id = COALESCE($3, project_id),
                hours = COALESCE($4, hours),
                date = COALESCE($5, date),
                description = COALESCE($6, description),
                category = COALESCE($7, category),
                work_type_id = COALESCE($8, work_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .bind(input.engineer_id)
            .bind(input.project_id)
            .bind(input.hours)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.work_type.map(KindId::from))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a work log. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
