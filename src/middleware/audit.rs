use sqlx::PgPool;
use uuid::Uuid;

/// Record a mutation in the audit trail. Failures are logged, not returned.
pub async fn log_event(
    pool: &PgPool,
    user_id: Uuid,
    action: &str,
    resource_type: &str,
    resource_id: Option<Uuid>,
    details: Option<serde_json::Value>,
) {
    tracing::debug!(%user_id, action, resource_type, "audit");

    if let Err(e) = crate::db::audit::log_event(
        pool,
        Some(user_id),
        action,
        resource_type,
        resource_id,
        details,
    )
    .await
    {
        tracing::error!("Failed to log audit event: {e}");
    }
}
