use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::payouts::PayoutRow;
use crate::ledger::money;
use crate::ledger::period::Period;
use crate::models::{MonthlyPayout, PayoutStatus};

/// What an editor is owed for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutLine {
    pub editor_id: Uuid,
    pub editor_name: String,
    pub rate_per_video: Decimal,
    pub total_videos: i64,
    pub total_amount: Decimal,
    pub status: PayoutStatus,
}

impl From<PayoutRow> for PayoutLine {
    /// A paid snapshot wins over the live count and current rate.
    fn from(row: PayoutRow) -> Self {
        match (row.status, row.paid_videos, row.paid_amount) {
            (Some(PayoutStatus::Paid), Some(videos), Some(amount)) => PayoutLine {
                editor_id: row.editor_id,
                editor_name: row.editor_name,
                rate_per_video: row.rate_per_video,
                total_videos: videos,
                total_amount: amount,
                status: PayoutStatus::Paid,
            },
            _ => PayoutLine {
                editor_id: row.editor_id,
                editor_name: row.editor_name,
                rate_per_video: row.rate_per_video,
                total_videos: row.live_videos,
                total_amount: Decimal::from(row.live_videos) * row.rate_per_video,
                status: PayoutStatus::Pending,
            },
        }
    }
}

/// One editor's line in a finalize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeEntry {
    pub editor_id: Uuid,
    pub total_videos: i64,
    pub total_amount: Decimal,
}

pub async fn compute_monthly_payouts(
    pool: &PgPool,
    period: Period,
) -> Result<Vec<PayoutLine>, sqlx::Error> {
    let rows = db::payouts::rows_for_month(pool, &period.key()).await?;
    Ok(rows
        .into_iter()
        .filter(|row| row.live_videos > 0)
        .map(PayoutLine::from)
        .collect())
}

/// Each editor appears at most once, with non-negative totals that fit the
/// payout columns.
pub fn validate_entries(entries: &[FinalizeEntry]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.editor_id) {
            return Err(format!("Duplicate entry for editor {}", entry.editor_id));
        }
        if entry.total_videos < 0 {
            return Err(format!(
                "total_videos must not be negative for editor {}",
                entry.editor_id
            ));
        }
        if entry.total_amount < Decimal::ZERO {
            return Err(format!(
                "total_amount must not be negative for editor {}",
                entry.editor_id
            ));
        }
        money::check_amount("total_amount", entry.total_amount)?;
    }
    Ok(())
}

#[derive(Debug)]
pub enum FinalizeError {
    Invalid(String),
    Store(sqlx::Error),
}

impl From<sqlx::Error> for FinalizeError {
    fn from(err: sqlx::Error) -> Self {
        FinalizeError::Store(err)
    }
}

/// Mark every entry paid for `period` in a single transaction. Re-finalizing
/// overwrites the earlier snapshot. Nothing is written if any entry fails.
pub async fn finalize_payouts(
    pool: &PgPool,
    period: Period,
    entries: &[FinalizeEntry],
) -> Result<Vec<MonthlyPayout>, FinalizeError> {
    validate_entries(entries).map_err(FinalizeError::Invalid)?;

    let mut tx = pool.begin().await?;
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        if db::editors::find_by_id(&mut *tx, entry.editor_id)
            .await?
            .is_none()
        {
            // dropping tx rolls back
            return Err(FinalizeError::Invalid(format!(
                "Unknown editor {}",
                entry.editor_id
            )));
        }

        let payout = db::payouts::upsert_paid(
            &mut *tx,
            entry.editor_id,
            period,
            entry.total_videos,
            entry.total_amount,
        )
        .await?;
        written.push(payout);
    }

    tx.commit().await?;

    tracing::info!(
        month = %period,
        count = written.len(),
        "Payouts finalized"
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(live: i64, rate: i64) -> PayoutRow {
        PayoutRow {
            editor_id: Uuid::nil(),
            editor_name: "Asha".to_string(),
            rate_per_video: Decimal::from(rate),
            live_videos: live,
            paid_videos: None,
            paid_amount: None,
            status: None,
        }
    }

    #[test]
    fn pending_amount_is_count_times_rate() {
        let line = PayoutLine::from(row(4, 500));
        assert_eq!(line.total_videos, 4);
        assert_eq!(line.total_amount, Decimal::from(2000));
        assert_eq!(line.status, PayoutStatus::Pending);
    }

    #[test]
    fn paid_snapshot_survives_rate_change() {
        let mut r = row(4, 600);
        r.paid_videos = Some(4);
        r.paid_amount = Some(Decimal::from(2000));
        r.status = Some(PayoutStatus::Paid);

        let line = PayoutLine::from(r);
        assert_eq!(line.total_amount, Decimal::from(2000));
        assert_eq!(line.rate_per_video, Decimal::from(600));
        assert_eq!(line.status, PayoutStatus::Paid);
    }

    #[test]
    fn negative_entries_are_rejected() {
        let entry = FinalizeEntry {
            editor_id: Uuid::nil(),
            total_videos: 2,
            total_amount: Decimal::from(-1),
        };
        assert!(validate_entries(&[entry]).is_err());

        let entry = FinalizeEntry {
            editor_id: Uuid::nil(),
            total_videos: -2,
            total_amount: Decimal::ZERO,
        };
        assert!(validate_entries(&[entry]).is_err());
    }

    #[test]
    fn duplicate_editors_are_rejected() {
        let editor_id = Uuid::now_v7();
        let entries = [
            FinalizeEntry {
                editor_id,
                total_videos: 2,
                total_amount: Decimal::from(1000),
            },
            FinalizeEntry {
                editor_id,
                total_videos: 3,
                total_amount: Decimal::from(1500),
            },
        ];
        let err = validate_entries(&entries).unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn sub_cent_totals_are_rejected() {
        let entry = FinalizeEntry {
            editor_id: Uuid::nil(),
            total_videos: 1,
            total_amount: Decimal::new(12345, 3),
        };
        assert!(validate_entries(&[entry]).is_err());
    }

    #[test]
    fn zero_entries_are_valid() {
        let entry = FinalizeEntry {
            editor_id: Uuid::nil(),
            total_videos: 0,
            total_amount: Decimal::ZERO,
        };
        assert!(validate_entries(&[entry]).is_ok());
        assert!(validate_entries(&[]).is_ok());
    }
}
