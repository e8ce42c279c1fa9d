use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::extractor::Founder;
use crate::db;
use crate::error::AppError;
use crate::ledger::dashboard::{self, DashboardStats};
use crate::ledger::money;
use crate::middleware::audit;
use crate::models::Savings;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpdateSavings {
    pub amount: Decimal,
}

pub async fn stats(
    _founder: Founder,
    State(state): State<SharedState>,
) -> Result<Json<DashboardStats>, AppError> {
    let today = Utc::now().date_naive();
    let stats = dashboard::get_stats(&state.pool, today).await?;
    Ok(Json(stats))
}

pub async fn get_savings(
    _founder: Founder,
    State(state): State<SharedState>,
) -> Result<Json<Savings>, AppError> {
    Ok(Json(db::savings::get(&state.pool).await?))
}

pub async fn update_savings(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<UpdateSavings>,
) -> Result<Json<Savings>, AppError> {
    money::check_amount("Amount", req.amount).map_err(AppError::BadRequest)?;

    let savings = db::savings::set(&state.pool, req.amount).await?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "savings.updated",
        "savings",
        None,
        Some(serde_json::json!({ "amount": savings.total_amount })),
    )
    .await;

    Ok(Json(savings))
}
