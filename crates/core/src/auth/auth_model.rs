use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ADMIN_SESSION_TTL_HOURS, USER_SESSION_TTL_HOURS};
use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// How long a session for this role stays valid.
    pub fn session_ttl(&self) -> Duration {
        match self {
            Role::Admin => Duration::hours(ADMIN_SESSION_TTL_HOURS),
            Role::User => Duration::hours(USER_SESSION_TTL_HOURS),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(ValidationError::InvalidInput(format!("Unknown role '{other}'")).into()),
        }
    }
}

/// Stored session row. `id` is the digest of the cookie token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl Session {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }
}

/// A freshly opened session: the token is only ever seen here and in the cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub role: Role,
    pub expires_at: NaiveDateTime,
    pub max_age: Duration,
}

/// Hex-encoded SHA-256 of a session token.
pub fn digest_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// The access gate for mutating operations. Anything but `Admin` is refused.
pub fn require_admin(role: Option<Role>) -> Result<()> {
    match role {
        Some(Role::Admin) => Ok(()),
        _ => Err(Error::Forbidden),
    }
}
