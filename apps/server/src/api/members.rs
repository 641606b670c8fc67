use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use gbti_core::members::{MemberUpdate, NewMember};

use crate::{
    auth::AdminOnly,
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{Member, MemberRequest, MemberResponse, MembersResponse, OkResponse},
};

#[utoipa::path(get, path = "/api/members", responses((status = 200, body = MembersResponse)))]
pub async fn list_members(State(state): State<Arc<AppState>>) -> ApiResult<Json<MembersResponse>> {
    let members = state.member_service.get_members()?;
    Ok(Json(MembersResponse {
        members: members.into_iter().map(Member::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = MemberRequest,
    responses((status = 201, body = MemberResponse), (status = 400), (status = 403))
)]
pub async fn create_member(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<MemberRequest>,
) -> ApiResult<(StatusCode, Json<MemberResponse>)> {
    let member = state
        .member_service
        .create_member(NewMember {
            name: payload.name,
            part: payload.part,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MemberResponse {
            member: member.into(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/members/{id}",
    params(("id" = String, Path, description = "Member id")),
    request_body = MemberRequest,
    responses((status = 200, body = MemberResponse), (status = 403), (status = 404))
)]
pub async fn update_member(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<MemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let member = state
        .member_service
        .update_member(MemberUpdate {
            id,
            name: payload.name,
            part: payload.part,
        })
        .await?;
    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(("id" = String, Path, description = "Member id")),
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn delete_member(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state.member_service.delete_member(&id).await?;
    Ok(Json(OkResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route("/members/{id}", put(update_member).delete(delete_member))
}
