use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::Founder;
use crate::error::AppError;
use crate::ledger::payouts::{self, FinalizeEntry, FinalizeError, PayoutLine};
use crate::ledger::period::Period;
use crate::middleware::audit;
use crate::models::MonthlyPayout;
use crate::state::SharedState;

/// Month and year arrive as either JSON numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum DatePart {
    Number(i64),
    Text(String),
}

impl DatePart {
    fn as_text(&self) -> String {
        match self {
            DatePart::Number(n) => n.to_string(),
            DatePart::Text(s) => s.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct FinalizeRequest {
    pub month: DatePart,
    pub year: DatePart,
    pub payouts: Vec<FinalizeEntry>,
}

#[derive(Serialize)]
pub struct FinalizeResponse {
    pub message: String,
    pub finalized: usize,
    pub payouts: Vec<MonthlyPayout>,
}

pub async fn list(
    _founder: Founder,
    State(state): State<SharedState>,
    Path((month, year)): Path<(String, String)>,
) -> Result<Json<Vec<PayoutLine>>, AppError> {
    let period = Period::from_parts(&month, &year).map_err(AppError::BadRequest)?;
    let lines = payouts::compute_monthly_payouts(&state.pool, period).await?;
    Ok(Json(lines))
}

pub async fn finalize(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<FinalizeRequest>,
) -> Result<Json<FinalizeResponse>, AppError> {
    let period = Period::from_parts(&req.month.as_text(), &req.year.as_text())
        .map_err(AppError::BadRequest)?;

    let written = payouts::finalize_payouts(&state.pool, period, &req.payouts)
        .await
        .map_err(|e| match e {
            FinalizeError::Invalid(msg) => AppError::BadRequest(msg),
            FinalizeError::Store(err) => AppError::Database(err),
        })?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "payouts.finalized",
        "monthly_payout",
        None,
        Some(serde_json::json!({ "month": period.key(), "count": written.len() })),
    )
    .await;

    Ok(Json(FinalizeResponse {
        message: "Payouts finalized successfully".to_string(),
        finalized: written.len(),
        payouts: written,
    }))
}
