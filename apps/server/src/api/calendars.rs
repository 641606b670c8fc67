use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::{
    auth::AdminOnly,
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{
        AddParticipantRequest, CalendarDetails, CalendarResponse, CalendarUpdateRequest,
        CalendarsResponse, NewCalendarRequest, OkResponse, RemoveParticipantRequest,
    },
};

#[utoipa::path(get, path = "/api/calendars", responses((status = 200, body = CalendarsResponse)))]
pub async fn list_calendars(State(state): State<Arc<AppState>>) -> ApiResult<Json<CalendarsResponse>> {
    let calendars = state.calendar_service.get_calendars()?;
    Ok(Json(CalendarsResponse {
        calendars: calendars.into_iter().map(CalendarDetails::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/calendars",
    request_body = NewCalendarRequest,
    responses((status = 201, body = CalendarResponse), (status = 403))
)]
pub async fn create_calendar(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewCalendarRequest>,
) -> ApiResult<(StatusCode, Json<CalendarResponse>)> {
    let calendar = state.calendar_service.create_calendar(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CalendarResponse {
            calendar: calendar.into(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/calendars",
    request_body = CalendarUpdateRequest,
    responses((status = 200, body = CalendarResponse), (status = 403), (status = 404))
)]
pub async fn update_calendar(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CalendarUpdateRequest>,
) -> ApiResult<Json<CalendarResponse>> {
    let calendar = state.calendar_service.update_calendar(payload.into()).await?;
    Ok(Json(CalendarResponse {
        calendar: calendar.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/calendars/{id}",
    params(("id" = String, Path, description = "Calendar id")),
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn delete_calendar(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state.calendar_service.delete_calendar(&id).await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/calendars/{id}/participants",
    params(("id" = String, Path, description = "Calendar id")),
    request_body = AddParticipantRequest,
    responses((status = 200, body = OkResponse), (status = 403), (status = 404))
)]
pub async fn add_participant(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<AddParticipantRequest>,
) -> ApiResult<Json<OkResponse>> {
    state
        .calendar_service
        .add_participant(&id, &payload.participant_name)
        .await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/calendars/{id}/participants",
    params(("id" = String, Path, description = "Calendar id")),
    request_body = RemoveParticipantRequest,
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn remove_participant(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<RemoveParticipantRequest>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state
        .calendar_service
        .remove_participant(&id, &payload.participant_id)
        .await?;
    Ok(Json(OkResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/calendars",
            get(list_calendars).post(create_calendar).put(update_calendar),
        )
        .route("/calendars/{id}", delete(delete_calendar))
        .route(
            "/calendars/{id}/participants",
            post(add_participant).delete(remove_participant),
        )
}
