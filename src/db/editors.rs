use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Editor, EditorStats};

const SELECT_EDITOR: &str = "SELECT e.id, e.user_id, u.name, u.email, e.rate_per_video, e.created_at
     FROM editors e
     JOIN users u ON e.user_id = u.id";

/// Insert the editor profile for an existing user. Returns the new editor id.
pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    rate_per_video: Decimal,
) -> Result<Uuid, sqlx::Error> {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO editors (user_id, rate_per_video) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(rate_per_video)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}

pub async fn list(pool: &PgPool) -> Result<Vec<Editor>, sqlx::Error> {
    sqlx::query_as::<_, Editor>(&format!("{SELECT_EDITOR} ORDER BY u.name"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: Uuid,
) -> Result<Option<Editor>, sqlx::Error> {
    sqlx::query_as::<_, Editor>(&format!("{SELECT_EDITOR} WHERE e.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_user_id(pool: &PgPool, user_id: Uuid) -> Result<Option<Editor>, sqlx::Error> {
    sqlx::query_as::<_, Editor>(&format!("{SELECT_EDITOR} WHERE e.user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Returns `false` when no editor has the given id.
pub async fn update_rate(
    pool: &PgPool,
    id: Uuid,
    rate_per_video: Decimal,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE editors SET rate_per_video = $2 WHERE id = $1")
        .bind(id)
        .bind(rate_per_video)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Per-editor video count and live cost for one month key.
pub async fn stats_for_month(pool: &PgPool, month: &str) -> Result<Vec<EditorStats>, sqlx::Error> {
    sqlx::query_as::<_, EditorStats>(
        "SELECT e.id AS editor_id,
                u.name,
                e.rate_per_video,
                COUNT(vc.id) AS videos_edited,
                COUNT(vc.id) * e.rate_per_video AS total_cost
         FROM editors e
         JOIN users u ON e.user_id = u.id
         LEFT JOIN video_completions vc ON vc.editor_id = e.id AND vc.month = $1
         GROUP BY e.id, u.name, e.rate_per_video
         ORDER BY videos_edited DESC, u.name",
    )
    .bind(month)
    .fetch_all(pool)
    .await
}
