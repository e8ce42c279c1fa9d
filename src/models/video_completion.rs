use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct VideoCompletion {
    pub id: Uuid,
    pub editor_id: Uuid,
    pub client_id: Uuid,
    pub completed_date: NaiveDate,
    /// `YYYY-MM`
    pub month: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ClientVideoCount {
    pub client_id: Uuid,
    pub client_name: String,
    pub video_count: i64,
}
