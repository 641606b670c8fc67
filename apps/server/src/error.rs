use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gbti_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

/// Fixed message returned whenever the admin gate refuses a request.
pub const ADMIN_REQUIRED_MESSAGE: &str = "관리자 권한이 필요합니다.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{}", ADMIN_REQUIRED_MESSAGE)]
    Forbidden,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Forbidden => StatusCode::FORBIDDEN,
        CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        CoreError::Database(
            DatabaseError::UniqueViolation(_) | DatabaseError::ForeignKeyViolation(_),
        ) => StatusCode::CONFLICT,
        CoreError::Database(_) | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(CoreError::Forbidden) | ApiError::Forbidden => {
                (StatusCode::FORBIDDEN, ADMIN_REQUIRED_MESSAGE.to_string())
            }
            ApiError::Core(e) => (core_status(e), e.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `Json` extractor whose rejections use the `{ code, message }` error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections use the `{ code, message }` error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use gbti_core::errors::ValidationError;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::Forbidden, StatusCode::FORBIDDEN),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                CoreError::Validation(ValidationError::MissingField("name".into())),
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::NotFound("Calendar".into()), StatusCode::NOT_FOUND),
            (
                CoreError::Database(DatabaseError::NotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::Database(DatabaseError::UniqueViolation("x".into())),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Database(DatabaseError::QueryFailed("disk I/O error".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }

    #[test]
    fn test_api_variants_map_to_status() {
        let cases = [
            (ApiError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApiError::Core(CoreError::NotFound("Member".into())),
                StatusCode::NOT_FOUND,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_forbidden_uses_fixed_status() {
        assert_eq!(
            ApiError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::Forbidden.to_string(), ADMIN_REQUIRED_MESSAGE);
    }
}
