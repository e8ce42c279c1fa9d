use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crownx::config::Config;
use crownx::models::MonthlyPayout;

pub const FOUNDER_EMAIL: &str = "founder1@crownx.com";
pub const PASSWORD: &str = "password123";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> (Value, StatusCode) {
        self.post("/api/v1/auth/register", None, &json!({
            "email": email, "password": password, "name": name
        }))
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        self.post("/api/v1/auth/login", None, &json!({
            "email": email, "password": password
        }))
        .await
    }

    /// Register the bootstrap founder, return their token.
    pub async fn bootstrap(&self) -> String {
        let (body, status) = self.register(FOUNDER_EMAIL, PASSWORD, "Founder 1").await;
        assert_eq!(status, StatusCode::OK, "bootstrap register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Add another founder and return their token.
    pub async fn add_founder(&self, token: &str, email: &str) -> String {
        let (body, status) = self
            .post_auth(
                "/api/v1/founders",
                token,
                &json!({ "name": "Founder 2", "email": email, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "add founder failed: {body}");
        let (body, _) = self.login(email, PASSWORD).await;
        body["token"].as_str().unwrap().to_string()
    }

    /// Create an editor, return (editor JSON, editor token).
    pub async fn create_editor(&self, token: &str, name: &str, email: &str, rate: f64) -> (Value, String) {
        let (editor, status) = self
            .post_auth(
                "/api/v1/editors",
                token,
                &json!({ "name": name, "email": email, "password": PASSWORD, "ratePerVideo": rate }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create editor failed: {editor}");
        let (body, status) = self.login(email, PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "editor login failed: {body}");
        (editor, body["token"].as_str().unwrap().to_string())
    }

    pub async fn create_client(&self, token: &str, name: &str) -> Value {
        let (client, status) = self
            .post_auth("/api/v1/clients", token, &json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::OK, "create client failed: {client}");
        client
    }

    /// Record `count` completions for the editor behind `editor_token`.
    pub async fn complete_videos(&self, editor_token: &str, client_id: &str, count: usize) {
        for _ in 0..count {
            let (body, status) = self
                .post_auth(
                    "/api/v1/videos/complete",
                    editor_token,
                    &json!({ "clientId": client_id }),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "complete video failed: {body}");
        }
    }

    pub async fn create_expense(&self, token: &str, amount: f64, category: &str, date: &str) -> Value {
        let (expense, status) = self
            .post_auth(
                "/api/v1/expenses",
                token,
                &json!({ "amount": amount, "category": category, "description": "", "date": date }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create expense failed: {expense}");
        expense
    }

    /// Payout rows stored for a `YYYY-MM` month.
    pub async fn stored_payouts(&self, month_key: &str) -> Vec<MonthlyPayout> {
        sqlx::query_as::<_, MonthlyPayout>(
            "SELECT * FROM monthly_payouts WHERE month = $1 ORDER BY created_at",
        )
        .bind(month_key)
        .fetch_all(&self.pool)
        .await
        .expect("query monthly_payouts")
    }

    async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> (Value, StatusCode) {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        self.post(path, Some(token), body).await
    }

    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Current month as (`MM`, `YYYY`, `YYYY-MM`), matching what the server stamps.
pub fn current_month() -> (String, String, String) {
    let today = chrono::Utc::now().date_naive();
    let month = today.format("%m").to_string();
    let year = today.format("%Y").to_string();
    let key = format!("{year}-{month}");
    (month, year, key)
}

pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn as_f64(value: &Value) -> f64 {
    value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {value}"))
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let db_name = format!("crownx_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        jwt_secret: "test-jwt-secret-that-is-long-enough".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        token_ttl_hours: 24,
        max_body_size: 65_536,
        cors_origins: vec![],
        static_dir: None,
        log_level: "warn".to_string(),
    };

    let app = crownx::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
