use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ledger::period::Period;
use crate::models::{ClientVideoCount, VideoCompletion};

pub async fn create(
    pool: &PgPool,
    editor_id: Uuid,
    client_id: Uuid,
    completed_date: NaiveDate,
) -> Result<VideoCompletion, sqlx::Error> {
    let period = Period::containing(completed_date);
    sqlx::query_as::<_, VideoCompletion>(
        "INSERT INTO video_completions (editor_id, client_id, completed_date, month, year)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(editor_id)
    .bind(client_id)
    .bind(completed_date)
    .bind(period.key())
    .bind(period.year())
    .fetch_one(pool)
    .await
}

pub async fn counts_by_client(
    pool: &PgPool,
    editor_id: Uuid,
    month: &str,
) -> Result<Vec<ClientVideoCount>, sqlx::Error> {
    sqlx::query_as::<_, ClientVideoCount>(
        "SELECT c.id AS client_id, c.name AS client_name, COUNT(*) AS video_count
         FROM video_completions vc
         JOIN clients c ON vc.client_id = c.id
         WHERE vc.editor_id = $1 AND vc.month = $2
         GROUP BY c.id, c.name
         ORDER BY video_count DESC, c.name",
    )
    .bind(editor_id)
    .bind(month)
    .fetch_all(pool)
    .await
}
