use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::Savings;

pub async fn get(pool: &PgPool) -> Result<Savings, sqlx::Error> {
    sqlx::query_as::<_, Savings>("SELECT total_amount, updated_at FROM savings WHERE id = 1")
        .fetch_one(pool)
        .await
}

/// Overwrite the running total. Upserts so a wiped row is recreated.
pub async fn set(pool: &PgPool, amount: Decimal) -> Result<Savings, sqlx::Error> {
    sqlx::query_as::<_, Savings>(
        "INSERT INTO savings (id, total_amount, updated_at) VALUES (1, $1, now())
         ON CONFLICT (id) DO UPDATE SET total_amount = EXCLUDED.total_amount, updated_at = now()
         RETURNING total_amount, updated_at",
    )
    .bind(amount)
    .fetch_one(pool)
    .await
}
