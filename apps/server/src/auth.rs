//! Password login, session cookies and the admin gate.
//!
//! The cookie holds an opaque token; the role behind it lives in the session
//! store, so a client cannot grant itself `admin` by editing the cookie.

use std::sync::Arc;

use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier},
    Argon2,
};
use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use gbti_core::auth::{require_admin, Role};

use crate::{
    error::{ApiError, ApiJson, ApiResult},
    main_lib::{AppState, Credentials},
    models::{LoginRequest, LoginResponse, OkResponse, SessionResponse},
};

pub const SESSION_COOKIE: &str = "gbti_session";

const INVALID_PASSWORD: &str = "Invalid password";

fn verify_against(hash: &str, candidate: &str) -> ApiResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash configuration: {e}")))?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(other) => Err(ApiError::Internal(format!(
            "Password verification failed: {other}"
        ))),
    }
}

impl Credentials {
    /// Role unlocked by `candidate`. The admin password wins when both match.
    pub fn role_for(&self, candidate: &str) -> ApiResult<Option<Role>> {
        if let Some(hash) = &self.admin_password_hash {
            if verify_against(hash, candidate)? {
                return Ok(Some(Role::Admin));
            }
        }
        if let Some(hash) = &self.user_password_hash {
            if verify_against(hash, candidate)? {
                return Ok(Some(Role::User));
            }
        }
        Ok(None)
    }
}

fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// Role of the calling session, `None` without a valid session cookie.
pub struct CurrentRole(pub Option<Role>);

impl FromRequestParts<Arc<AppState>> for CurrentRole {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Ok(CurrentRole(None));
        };
        let role = state.session_service.resolve_role(cookie.value()).await?;
        Ok(CurrentRole(role))
    }
}

/// Extractor that only succeeds for admin sessions.
///
/// Runs before the body is read, so a refused request never reaches a service.
pub struct AdminOnly;

impl FromRequestParts<Arc<AppState>> for AdminOnly {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentRole(role) = CurrentRole::from_request_parts(parts, state).await?;
        require_admin(role).map_err(|_| ApiError::Forbidden)?;
        Ok(AdminOnly)
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Wrong password")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let Some(role) = state.credentials.role_for(&payload.password)? else {
        tracing::info!("Rejected login attempt");
        return Err(ApiError::Unauthorized(INVALID_PASSWORD.to_string()));
    };

    // Replace any session this browser already had.
    if let Some(previous) = jar.get(SESSION_COOKIE) {
        state.session_service.close_session(previous.value()).await?;
    }

    let issued = state.session_service.open_session(role).await?;
    tracing::info!(role = %role, "Login succeeded");
    let cookie = session_cookie(
        issued.token,
        issued.max_age.num_seconds(),
        state.secure_cookies,
    );
    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            ok: true,
            role: role.as_str().to_string(),
        }),
    ))
}

#[utoipa::path(post, path = "/api/logout", responses((status = 200, body = OkResponse)))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<OkResponse>)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.session_service.close_session(cookie.value()).await?;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    Ok((jar.remove(removal), Json(OkResponse::ok())))
}

#[utoipa::path(get, path = "/api/session", responses((status = 200, body = SessionResponse)))]
pub async fn session(CurrentRole(role): CurrentRole) -> Json<SessionResponse> {
    Json(SessionResponse {
        role: role.map(|r| r.as_str().to_string()),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{password_hash::SaltString, PasswordHasher};
    use rand::rngs::OsRng;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_role_for_password() {
        let credentials = Credentials {
            admin_password_hash: Some(hash("admin-pass")),
            user_password_hash: Some(hash("user-pass")),
        };
        assert_eq!(credentials.role_for("admin-pass").unwrap(), Some(Role::Admin));
        assert_eq!(credentials.role_for("user-pass").unwrap(), Some(Role::User));
        assert_eq!(credentials.role_for("nope").unwrap(), None);
        assert_eq!(credentials.role_for("").unwrap(), None);
    }

    #[test]
    fn test_without_hashes_nothing_unlocks() {
        let credentials = Credentials {
            admin_password_hash: None,
            user_password_hash: None,
        };
        assert_eq!(credentials.role_for("anything").unwrap(), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), 86_400, true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(1)));
    }
}
