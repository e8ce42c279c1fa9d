//! Derived ledger values: month periods, editor payouts and dashboard totals.

pub mod dashboard;
pub mod money;
pub mod payouts;
pub mod period;
