use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::{AuthUser, Founder, ACCESS_COOKIE};
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{Role, User};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

fn auth_cookie(token: &str, ttl_hours: i64) -> CookieJar {
    let access = Cookie::build((ACCESS_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(ttl_hours))
        .build();

    CookieJar::new().add(access)
}

fn clear_auth_cookie() -> CookieJar {
    let access = Cookie::build((ACCESS_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(access)
}

fn issue(state: &SharedState, user: User) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let ttl = state.config.token_ttl_hours;
    let claims = Claims::for_user(&user, ttl);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let jar = auth_cookie(&token, ttl);
    Ok((jar, Json(AuthResponse { token, user })))
}

pub(crate) fn validate_account_fields(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    password::check_length(password).map_err(AppError::BadRequest)
}

/// First-run signup. Only succeeds while the users table is empty; the
/// account created is a founder.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    validate_account_fields(&req.name, &req.email, &req.password)?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Advisory lock prevents concurrent bootstrap registrations
    let mut tx = state.pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(&mut *tx)
        .await?;

    let count = db::users::count_all(&mut *tx).await?;
    if count > 0 {
        return Err(AppError::Forbidden(
            "Registration is closed. Ask a founder for an account.".to_string(),
        ));
    }

    let user = db::users::create(
        &mut *tx,
        req.name.trim(),
        &req.email.trim().to_lowercase(),
        &pw_hash,
        Role::Founder,
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id = %user.id, "Bootstrap founder registered");

    audit::log_event(&state.pool, user.id, "user.registered", "user", Some(user.id), None).await;

    issue(&state, user)
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if state.login_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let Some(user) = db::users::find_by_email(&state.pool, &req.email).await? else {
        state.login_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    };

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&req.email);
        tracing::warn!(user_id = %user.id, "Failed login");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    state.login_limiter.reset(&req.email);
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "Login");

    issue(&state, user)
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (clear_auth_cookie(), MessageResponse::new("Logged out successfully"))
}

pub async fn me(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn change_password(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    password::check_length(&req.new_password).map_err(AppError::BadRequest)?;

    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let valid = password::verify(&req.current_password, &user.password_hash)
        .map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::Unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.new_password).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, user.id, &pw_hash).await?;

    audit::log_event(
        &state.pool,
        user.id,
        "user.password_changed",
        "user",
        Some(user.id),
        None,
    )
    .await;

    Ok(MessageResponse::new("Password updated successfully"))
}

pub async fn create_founder(
    Founder(auth): Founder,
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<User>, AppError> {
    validate_account_fields(&req.name, &req.email, &req.password)?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        req.name.trim(),
        &req.email.trim().to_lowercase(),
        &pw_hash,
        Role::Founder,
    )
    .await
    .map_err(|e| AppError::conflict_on_unique(e, "A user with this email already exists"))?;

    audit::log_event(
        &state.pool,
        auth.user_id,
        "founder.created",
        "user",
        Some(user.id),
        None,
    )
    .await;

    Ok(Json(user))
}
