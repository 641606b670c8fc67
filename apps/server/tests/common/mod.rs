#![allow(dead_code)]

use std::time::Duration;

use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use gbti_server::{api::app_router, build_state, config::Config};
use rand::rngs::OsRng;
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "admin-secret";
pub const USER_PASSWORD: &str = "user-secret";
pub const ADMIN_REQUIRED: &str = "관리자 권한이 필요합니다.";

fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub router: Router,
    // Keeps the database directory alive for the test.
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_vapid_key(None).await
    }

    pub async fn with_vapid_key(vapid_public_key: Option<&str>) -> Self {
        let dir = tempdir().unwrap();
        let config = Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: dir.path().join("test.db").to_string_lossy().to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            admin_password_hash: Some(hash(ADMIN_PASSWORD)),
            user_password_hash: Some(hash(USER_PASSWORD)),
            secure_cookies: false,
            vapid_public_key: vapid_public_key.map(str::to_string),
        };
        let state = build_state(&config).await.unwrap();
        Self {
            router: app_router(state, &config),
            _dir: dir,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, cookie, None).await
    }

    /// Logs in and returns the `name=value` pair to send back as a Cookie header.
    pub async fn login(&self, password: &str) -> String {
        let response = self
            .send(
                Method::POST,
                "/api/login",
                None,
                Some(serde_json::json!({ "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        session_cookie_pair(&response.headers).expect("login did not set a session cookie")
    }

    pub async fn admin(&self) -> String {
        self.login(ADMIN_PASSWORD).await
    }

    /// Creates a calendar as admin and returns its id.
    pub async fn create_calendar(&self, admin: &str, name: &str) -> String {
        let response = self
            .send(
                Method::POST,
                "/api/calendars",
                Some(admin),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["calendar"]["id"].as_str().unwrap().to_string()
    }
}

/// The `gbti_session=...` pair from a response's Set-Cookie headers.
pub fn session_cookie_pair(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("gbti_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Full Set-Cookie header for the session cookie.
pub fn session_set_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("gbti_session="))
        .map(str::to_string)
}
