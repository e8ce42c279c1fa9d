use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Savings {
    pub total_amount: Decimal,
    pub updated_at: DateTime<Utc>,
}
