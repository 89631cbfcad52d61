//! Repository for the `transactions` table.

use budget_core::kinds::KindId;
use budget_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};

const COLUMNS: &str = "id, project_id, transaction_type_id, amount, category, date, \
                       description, created_at, updated_at";

/// Provides CRUD and per-project listing for transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions
                (project_id, transaction_type_id, amount, category, date, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(input.project_id)
            .bind(input.transaction_type.id())
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List transactions, optionally for a single project, most recent first.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a transaction. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                project_id = COALESCE($2, project_id),
                transaction_type_id = COALESCE($3, transaction_type_id),
                amount = COALESCE($4, amount),
                category = COALESCE($5, category),
                date = COALESCE($6, date),
                description = COALESCE($7, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.transaction_type.map(KindId::from))
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a transaction. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
