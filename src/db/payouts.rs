use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ledger::period::Period;
use crate::models::{MonthlyPayout, PayoutStatus};

/// Live completion count for an editor in a month, alongside any paid snapshot.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayoutRow {
    pub editor_id: Uuid,
    pub editor_name: String,
    pub rate_per_video: Decimal,
    pub live_videos: i64,
    pub paid_videos: Option<i64>,
    pub paid_amount: Option<Decimal>,
    pub status: Option<PayoutStatus>,
}

/// Editors with at least one completion in `month`.
pub async fn rows_for_month(pool: &PgPool, month: &str) -> Result<Vec<PayoutRow>, sqlx::Error> {
    sqlx::query_as::<_, PayoutRow>(
        "SELECT e.id AS editor_id,
                u.name AS editor_name,
                e.rate_per_video,
                COUNT(vc.id) AS live_videos,
                mp.total_videos AS paid_videos,
                mp.total_amount AS paid_amount,
                mp.status
         FROM editors e
         JOIN users u ON e.user_id = u.id
         JOIN video_completions vc ON vc.editor_id = e.id AND vc.month = $1
         LEFT JOIN monthly_payouts mp
                ON mp.editor_id = e.id AND mp.month = $1 AND mp.status = 'paid'
         GROUP BY e.id, u.name, e.rate_per_video, mp.total_videos, mp.total_amount, mp.status
         HAVING COUNT(vc.id) > 0
         ORDER BY u.name",
    )
    .bind(month)
    .fetch_all(pool)
    .await
}

/// Insert or overwrite the paid record for an editor/month.
pub async fn upsert_paid<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    editor_id: Uuid,
    period: Period,
    total_videos: i64,
    total_amount: Decimal,
) -> Result<MonthlyPayout, sqlx::Error> {
    sqlx::query_as::<_, MonthlyPayout>(
        "INSERT INTO monthly_payouts (editor_id, month, year, total_videos, total_amount, status)
         VALUES ($1, $2, $3, $4, $5, 'paid')
         ON CONFLICT (editor_id, month) DO UPDATE
         SET year = EXCLUDED.year,
             total_videos = EXCLUDED.total_videos,
             total_amount = EXCLUDED.total_amount,
             status = 'paid',
             updated_at = now()
         RETURNING *",
    )
    .bind(editor_id)
    .bind(period.key())
    .bind(period.year())
    .bind(total_videos)
    .bind(total_amount)
    .fetch_one(executor)
    .await
}

pub async fn sum_paid_for_month(pool: &PgPool, month: &str) -> Result<Decimal, sqlx::Error> {
    let row: (Decimal,) = sqlx::query_as(
        "SELECT COALESCE(SUM(total_amount), 0) FROM monthly_payouts
         WHERE month = $1 AND status = 'paid'",
    )
    .bind(month)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}
