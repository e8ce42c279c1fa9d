pub mod audit;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod editors;
pub mod expenses;
pub mod payouts;
pub mod videos;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/founders", post(auth::create_founder))
        // Expenses
        .route("/api/v1/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/api/v1/expenses/{id}",
            put(expenses::update).delete(expenses::delete),
        )
        // Dashboard & savings
        .route("/api/v1/dashboard/stats", get(dashboard::stats))
        .route(
            "/api/v1/savings",
            get(dashboard::get_savings).put(dashboard::update_savings),
        )
        // Clients
        .route("/api/v1/clients", get(clients::list).post(clients::create))
        // Editors
        .route("/api/v1/editors", get(editors::list).post(editors::create))
        .route("/api/v1/editors/stats", get(editors::stats))
        .route("/api/v1/editors/{id}", put(editors::update))
        // Videos
        .route("/api/v1/videos/complete", post(videos::complete))
        .route("/api/v1/videos/my-stats", get(videos::my_stats))
        // Payouts
        .route("/api/v1/payouts/finalize", post(payouts::finalize))
        .route("/api/v1/payouts/{month}/{year}", get(payouts::list))
        // Audit
        .route("/api/v1/audit", get(audit::list))
}
