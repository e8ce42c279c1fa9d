use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Expense;

pub struct ExpenseInput<'a> {
    pub amount: Decimal,
    pub category: &'a str,
    pub description: Option<&'a str>,
    pub date: NaiveDate,
}

pub async fn list(pool: &PgPool) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "SELECT e.*, u.name AS founder_name
         FROM expenses e
         JOIN users u ON e.founder_id = u.id
         ORDER BY e.date DESC, e.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Expenses dated in `[start, end)`.
pub async fn list_between(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "SELECT e.*, u.name AS founder_name
         FROM expenses e
         JOIN users u ON e.founder_id = u.id
         WHERE e.date >= $1 AND e.date < $2
         ORDER BY e.date DESC, e.created_at DESC",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    founder_id: Uuid,
    input: &ExpenseInput<'_>,
) -> Result<Expense, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "WITH inserted AS (
             INSERT INTO expenses (amount, category, description, date, founder_id)
             VALUES ($1, $2, $3, $4, $5) RETURNING *
         )
         SELECT i.*, u.name AS founder_name
         FROM inserted i
         JOIN users u ON i.founder_id = u.id",
    )
    .bind(input.amount)
    .bind(input.category)
    .bind(input.description)
    .bind(input.date)
    .bind(founder_id)
    .fetch_one(pool)
    .await
}

/// Update an expense owned by `founder_id`. `None` when it is missing or
/// belongs to someone else.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    founder_id: Uuid,
    input: &ExpenseInput<'_>,
) -> Result<Option<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "WITH updated AS (
             UPDATE expenses
             SET amount = $3, category = $4, description = $5, date = $6, updated_at = now()
             WHERE id = $1 AND founder_id = $2
             RETURNING *
         )
         SELECT x.*, u.name AS founder_name
         FROM updated x
         JOIN users u ON x.founder_id = u.id",
    )
    .bind(id)
    .bind(founder_id)
    .bind(input.amount)
    .bind(input.category)
    .bind(input.description)
    .bind(input.date)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when nothing owned by `founder_id` was deleted.
pub async fn delete(pool: &PgPool, id: Uuid, founder_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND founder_id = $2")
        .bind(id)
        .bind(founder_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn sum_between(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Decimal, sqlx::Error> {
    let row: (Decimal,) = sqlx::query_as(
        "SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE date >= $1 AND date < $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

pub async fn sum_all(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
    let row: (Decimal,) = sqlx::query_as("SELECT COALESCE(SUM(amount), 0) FROM expenses")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
