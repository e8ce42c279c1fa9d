use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::Founder;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::ledger::money;
use crate::ledger::period::Period;
use crate::middleware::audit;
use crate::models::{Editor, EditorStats, Role};
use crate::routes::auth::validate_account_fields;
use crate::routes::expenses::MonthQuery;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub rate_per_video: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditor {
    pub rate_per_video: Decimal,
}

fn validate_rate(rate: Decimal) -> Result<(), AppError> {
    if rate < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Rate per video must not be negative".to_string(),
        ));
    }
    money::check_amount("Rate per video", rate).map_err(AppError::BadRequest)
}

pub async fn list(
    _founder: Founder,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Editor>>, AppError> {
    Ok(Json(db::editors::list(&state.pool).await?))
}

/// Create the editor's login and pay profile together.
pub async fn create(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<CreateEditor>,
) -> Result<Json<Editor>, AppError> {
    validate_account_fields(&req.name, &req.email, &req.password)?;
    validate_rate(req.rate_per_video)?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let mut tx = state.pool.begin().await?;

    let user = db::users::create(
        &mut *tx,
        req.name.trim(),
        &req.email.trim().to_lowercase(),
        &pw_hash,
        Role::Editor,
    )
    .await
    .map_err(|e| AppError::conflict_on_unique(e, "A user with this email already exists"))?;

    let editor_id = db::editors::create(&mut *tx, user.id, req.rate_per_video).await?;
    let editor = db::editors::find_by_id(&mut *tx, editor_id)
        .await?
        .ok_or_else(|| AppError::Internal("Editor missing after insert".to_string()))?;

    tx.commit().await?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "editor.created",
        "editor",
        Some(editor.id),
        Some(serde_json::json!({ "rate_per_video": editor.rate_per_video })),
    )
    .await;

    Ok(Json(editor))
}

/// Change an editor's rate. Finalized payouts keep the amount they were paid.
pub async fn update(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEditor>,
) -> Result<Json<Editor>, AppError> {
    validate_rate(req.rate_per_video)?;

    if !db::editors::update_rate(&state.pool, id, req.rate_per_video).await? {
        return Err(AppError::NotFound("Editor not found".to_string()));
    }

    let editor = db::editors::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Editor not found".to_string()))?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "editor.rate_updated",
        "editor",
        Some(editor.id),
        Some(serde_json::json!({ "rate_per_video": editor.rate_per_video })),
    )
    .await;

    Ok(Json(editor))
}

/// Videos edited and live cost per editor, defaulting to the current month.
pub async fn stats(
    _founder: Founder,
    State(state): State<SharedState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<EditorStats>>, AppError> {
    let period = query
        .period()?
        .unwrap_or_else(|| Period::containing(Utc::now().date_naive()));
    Ok(Json(
        db::editors::stats_for_month(&state.pool, &period.key()).await?,
    ))
}
