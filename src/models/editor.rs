use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An editor profile joined with its user's name and email.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Editor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub rate_per_video: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Video count and cost of one editor over a month, zero-count editors included.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct EditorStats {
    pub editor_id: Uuid,
    pub name: String,
    pub rate_per_video: Decimal,
    pub videos_edited: i64,
    pub total_cost: Decimal,
}
