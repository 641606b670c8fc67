use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    routing::{get, post},
    Json, Router,
};

use crate::{
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{OkResponse, SubscribeRequest, UnsubscribeRequest, VapidKeyResponse},
};

#[utoipa::path(
    post,
    path = "/api/notifications/subscribe",
    request_body = SubscribeRequest,
    responses((status = 200, body = OkResponse), (status = 400))
)]
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<SubscribeRequest>,
) -> ApiResult<Json<OkResponse>> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .notification_service
        .subscribe(payload.into_core(user_agent))
        .await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/notifications/unsubscribe",
    request_body = UnsubscribeRequest,
    responses((status = 200, body = OkResponse))
)]
pub async fn unsubscribe(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UnsubscribeRequest>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state
        .notification_service
        .unsubscribe(&payload.endpoint)
        .await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/notifications/vapid-key",
    responses((status = 200, body = VapidKeyResponse), (status = 404))
)]
pub async fn vapid_key(State(state): State<Arc<AppState>>) -> ApiResult<Json<VapidKeyResponse>> {
    let public_key = state.notification_service.vapid_public_key()?;
    Ok(Json(VapidKeyResponse { public_key }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notifications/subscribe", post(subscribe))
        .route("/notifications/unsubscribe", post(unsubscribe))
        .route("/notifications/vapid-key", get(vapid_key))
}
