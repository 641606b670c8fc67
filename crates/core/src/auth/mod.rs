//! Roles, sessions and the admin gate.
//!
//! A session cookie carries an opaque random token. Only the SHA-256 digest of
//! the token is stored, next to the role it grants and its expiry.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::{digest_token, require_admin, IssuedSession, Role, Session};
pub use auth_service::SessionService;
pub use auth_traits::{SessionRepositoryTrait, SessionServiceTrait};
