use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::ledger::period::Period;
use crate::middleware::audit;
use crate::models::{ClientVideoCount, Editor, VideoCompletion};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteVideo {
    pub client_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyStats {
    pub month: String,
    pub client_stats: Vec<ClientVideoCount>,
    pub total_videos: i64,
    pub rate_per_video: Decimal,
    pub estimated_earnings: Decimal,
}

async fn caller_editor(state: &SharedState, auth: &AuthUser) -> Result<Editor, AppError> {
    db::editors::find_by_user_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Editor not found".to_string()))
}

/// Record a finished video for the calling editor, dated today.
pub async fn complete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CompleteVideo>,
) -> Result<Json<VideoCompletion>, AppError> {
    let editor = caller_editor(&state, &auth).await?;

    if db::clients::find_by_id(&state.pool, req.client_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Client not found".to_string()));
    }

    let today = Utc::now().date_naive();
    let completion = db::videos::create(&state.pool, editor.id, req.client_id, today).await?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "video.completed",
        "video_completion",
        Some(completion.id),
        Some(serde_json::json!({ "client_id": req.client_id, "month": completion.month })),
    )
    .await;

    Ok(Json(completion))
}

/// The calling editor's videos this month, per client.
pub async fn my_stats(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<MyStats>, AppError> {
    let editor = caller_editor(&state, &auth).await?;
    let month = Period::containing(Utc::now().date_naive()).key();

    let client_stats = db::videos::counts_by_client(&state.pool, editor.id, &month).await?;
    let total_videos: i64 = client_stats.iter().map(|c| c.video_count).sum();

    Ok(Json(MyStats {
        month,
        client_stats,
        total_videos,
        rate_per_video: editor.rate_per_video,
        estimated_earnings: Decimal::from(total_videos) * editor.rate_per_video,
    }))
}
