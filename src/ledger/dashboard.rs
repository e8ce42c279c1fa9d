use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db;
use crate::ledger::period::Period;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_savings: Decimal,
    pub monthly_expenses: Decimal,
    pub total_expenses: Decimal,
    pub monthly_payouts: Decimal,
    pub net_profit: Decimal,
    pub remaining_balance: Decimal,
}

impl DashboardStats {
    /// `netProfit = savings - all expenses - this month's paid payouts`.
    /// Expense rows are summed as signed values, so income rows reduce the
    /// expense totals.
    pub fn derive(
        total_savings: Decimal,
        monthly_expenses: Decimal,
        total_expenses: Decimal,
        monthly_payouts: Decimal,
    ) -> Self {
        Self {
            total_savings,
            monthly_expenses,
            total_expenses,
            monthly_payouts,
            net_profit: total_savings - total_expenses - monthly_payouts,
            remaining_balance: total_savings - total_expenses,
        }
    }
}

pub async fn get_stats(pool: &PgPool, today: NaiveDate) -> Result<DashboardStats, sqlx::Error> {
    let period = Period::containing(today);
    let (start, end) = period.bounds();

    let savings = db::savings::get(pool).await?;
    let monthly_expenses = db::expenses::sum_between(pool, start, end).await?;
    let total_expenses = db::expenses::sum_all(pool).await?;
    let monthly_payouts = db::payouts::sum_paid_for_month(pool, &period.key()).await?;

    Ok(DashboardStats::derive(
        savings.total_amount,
        monthly_expenses,
        total_expenses,
        monthly_payouts,
    ))
}
