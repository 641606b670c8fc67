use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Argon2 PHC string for the admin password.
    pub admin_password_hash: Option<String>,
    /// Argon2 PHC string for the shared user password.
    pub user_password_hash: Option<String>,
    pub secure_cookies: bool,
    pub vapid_public_key: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GBTI_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid GBTI_LISTEN_ADDR")?;
        let db_path = std::env::var("GBTI_DB_PATH").unwrap_or_else(|_| "./db/gbti.db".into());
        let cors_allow = std::env::var("GBTI_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("GBTI_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let secure_cookies = std::env::var("GBTI_SECURE_COOKIES")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            admin_password_hash: non_empty_var("GBTI_ADMIN_PASSWORD_HASH"),
            user_password_hash: non_empty_var("GBTI_USER_PASSWORD_HASH"),
            secure_cookies,
            vapid_public_key: non_empty_var("GBTI_VAPID_PUBLIC_KEY"),
        })
    }
}
