use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{
    auth::AdminOnly,
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{NewNoticeRequest, Notice, NoticeResponse, NoticesResponse, OkResponse},
};

#[utoipa::path(get, path = "/api/notices", responses((status = 200, body = NoticesResponse)))]
pub async fn list_notices(State(state): State<Arc<AppState>>) -> ApiResult<Json<NoticesResponse>> {
    let notices = state.notice_service.get_notices()?;
    Ok(Json(NoticesResponse {
        notices: notices.into_iter().map(Notice::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = NewNoticeRequest,
    responses((status = 201, body = NoticeResponse), (status = 400), (status = 403))
)]
pub async fn create_notice(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewNoticeRequest>,
) -> ApiResult<(StatusCode, Json<NoticeResponse>)> {
    let notice = state.notice_service.create_notice(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(NoticeResponse {
            notice: notice.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    params(("id" = String, Path, description = "Notice id")),
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn delete_notice(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state.notice_service.delete_notice(&id).await?;
    Ok(Json(OkResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notices", get(list_notices).post(create_notice))
        .route("/notices/{id}", delete(delete_notice))
}
