use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::{AuthUser, Founder};
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::Client;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateClient {
    pub name: String,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Client>>, AppError> {
    Ok(Json(db::clients::list(&state.pool).await?))
}

pub async fn create(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<CreateClient>,
) -> Result<Json<Client>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Client name is required".to_string()));
    }

    let client = db::clients::create(&state.pool, name).await?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "client.created",
        "client",
        Some(client.id),
        None,
    )
    .await;

    Ok(Json(client))
}
