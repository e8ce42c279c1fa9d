use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub token_ttl_hours: i64,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("CROWNX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CROWNX_HOST: {e}"))?;

        let port: u16 = env_or("CROWNX_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid CROWNX_PORT: {e}"))?;

        let token_ttl_hours: i64 = env_or("CROWNX_TOKEN_TTL_HOURS", "24")
            .parse()
            .map_err(|e| format!("Invalid CROWNX_TOKEN_TTL_HOURS: {e}"))?;
        if token_ttl_hours <= 0 {
            return Err("CROWNX_TOKEN_TTL_HOURS must be positive".to_string());
        }

        let max_body_size: usize = env_or("CROWNX_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CROWNX_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<String> = env_or("CROWNX_CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let static_dir = std::env::var("CROWNX_STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env_or("CROWNX_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            token_ttl_hours,
            max_body_size,
            cors_origins,
            static_dir,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
