use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::Founder;
use crate::db;
use crate::db::expenses::ExpenseInput;
use crate::error::AppError;
use crate::ledger::money;
use crate::ledger::period::Period;
use crate::middleware::audit;
use crate::models::Expense;
use crate::routes::auth::MessageResponse;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

impl MonthQuery {
    /// Both parts or neither; a lone month or year is rejected.
    pub fn period(&self) -> Result<Option<Period>, AppError> {
        match (self.month.as_deref(), self.year.as_deref()) {
            (Some(month), Some(year)) => Period::from_parts(month, year)
                .map(Some)
                .map_err(AppError::BadRequest),
            (None, None) => Ok(None),
            _ => Err(AppError::BadRequest(
                "month and year must be given together".to_string(),
            )),
        }
    }
}

#[derive(Deserialize)]
pub struct ExpenseRequest {
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl ExpenseRequest {
    fn input(&self) -> Result<ExpenseInput<'_>, AppError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(AppError::BadRequest("Category is required".to_string()));
        }
        if self.amount.is_zero() {
            return Err(AppError::BadRequest("Amount must not be zero".to_string()));
        }
        money::check_amount("Amount", self.amount).map_err(AppError::BadRequest)?;

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        Ok(ExpenseInput {
            amount: self.amount,
            category,
            description,
            date: self.date,
        })
    }
}

pub async fn list(
    _founder: Founder,
    State(state): State<SharedState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = match query.period()? {
        Some(period) => {
            let (start, end) = period.bounds();
            db::expenses::list_between(&state.pool, start, end).await?
        }
        None => db::expenses::list(&state.pool).await?,
    };
    Ok(Json(expenses))
}

pub async fn create(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<ExpenseRequest>,
) -> Result<Json<Expense>, AppError> {
    let input = req.input()?;
    let expense = db::expenses::create(&state.pool, auth.user_id, &input).await?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "expense.created",
        "expense",
        Some(expense.id),
        Some(serde_json::json!({ "amount": expense.amount, "category": expense.category })),
    )
    .await;

    Ok(Json(expense))
}

pub async fn update(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ExpenseRequest>,
) -> Result<Json<Expense>, AppError> {
    let input = req.input()?;
    let expense = db::expenses::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Expense not found or unauthorized".to_string()))?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "expense.updated",
        "expense",
        Some(expense.id),
        None,
    )
    .await;

    Ok(Json(expense))
}

pub async fn delete(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if !db::expenses::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::NotFound(
            "Expense not found or unauthorized".to_string(),
        ));
    }

    audit::log_event(
        &state.pool,
        auth.user_id,
        "expense.deleted",
        "expense",
        Some(id),
        None,
    )
    .await;

    Ok(MessageResponse::new("Expense deleted successfully"))
}
