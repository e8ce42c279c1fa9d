use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payout_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Paid,
}

/// Snapshot of what an editor was paid for a month.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct MonthlyPayout {
    pub id: Uuid,
    pub editor_id: Uuid,
    pub month: String,
    pub year: i32,
    pub total_videos: i64,
    pub total_amount: Decimal,
    pub status: PayoutStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
