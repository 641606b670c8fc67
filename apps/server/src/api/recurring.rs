use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use gbti_core::constants::DEFAULT_OCCURRENCE_WEEKS;

use crate::{
    auth::AdminOnly,
    error::{ApiJson, ApiQuery, ApiResult},
    main_lib::AppState,
    models::{
        AnchorUpdateRequest, NewRecurringSlotRequest, Occurrence, OccurrenceQuery,
        OccurrencesResponse, OkResponse, RecurringSlot, RecurringSlotUpdateRequest,
        SlotIdRequest, SlotResponse, SlotsResponse,
    },
};

#[utoipa::path(
    get,
    path = "/api/calendars/{id}/recurring",
    params(("id" = String, Path, description = "Calendar id")),
    responses((status = 200, body = SlotsResponse))
)]
pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SlotsResponse>> {
    let slots = state.recurring_service.get_slots(&id)?;
    Ok(Json(SlotsResponse {
        slots: slots.into_iter().map(RecurringSlot::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/calendars/{id}/recurring",
    params(("id" = String, Path, description = "Calendar id")),
    request_body = NewRecurringSlotRequest,
    responses((status = 201, body = SlotResponse), (status = 400), (status = 403), (status = 404))
)]
pub async fn create_slot(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<NewRecurringSlotRequest>,
) -> ApiResult<(StatusCode, Json<SlotResponse>)> {
    let slot = state
        .recurring_service
        .create_slot(payload.into_core(id))
        .await?;
    Ok((StatusCode::CREATED, Json(SlotResponse { slot: slot.into() })))
}

#[utoipa::path(
    put,
    path = "/api/calendars/{id}/recurring",
    params(("id" = String, Path, description = "Calendar id")),
    request_body = RecurringSlotUpdateRequest,
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn update_slots(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<RecurringSlotUpdateRequest>,
) -> ApiResult<Json<OkResponse>> {
    let updated = state
        .recurring_service
        .update_slots(payload.into_core(id))
        .await?;
    tracing::debug!(updated, "Recurring slots updated");
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/calendars/{id}/recurring",
    params(("id" = String, Path, description = "Calendar id")),
    request_body = SlotIdRequest,
    responses((status = 200, body = OkResponse), (status = 403))
)]
pub async fn delete_slot(
    _admin: AdminOnly,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<SlotIdRequest>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state
        .recurring_service
        .delete_slot(&id, &payload.slot_id)
        .await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/calendars/{id}/occurrences",
    params(("id" = String, Path, description = "Calendar id"), OccurrenceQuery),
    responses((status = 200, body = OccurrencesResponse), (status = 400))
)]
pub async fn list_occurrences(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<OccurrenceQuery>,
) -> ApiResult<Json<OccurrencesResponse>> {
    let from = query.from.unwrap_or_else(|| Utc::now().date_naive());
    let weeks = query.weeks.unwrap_or(DEFAULT_OCCURRENCE_WEEKS);
    let occurrences = state.recurring_service.get_occurrences(&id, from, weeks)?;
    Ok(Json(OccurrencesResponse {
        occurrences: occurrences.into_iter().map(Occurrence::from).collect(),
    }))
}

/// Moves a slot's anchor after an occurrence has passed. Open to any caller.
#[utoipa::path(
    post,
    path = "/api/recurring/update",
    request_body = AnchorUpdateRequest,
    responses((status = 200, body = OkResponse), (status = 400))
)]
pub async fn advance_anchor(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<AnchorUpdateRequest>,
) -> ApiResult<Json<OkResponse>> {
    let _ = state.recurring_service.advance_anchor(payload.into()).await?;
    Ok(Json(OkResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/calendars/{id}/recurring",
            get(list_slots)
                .post(create_slot)
                .put(update_slots)
                .delete(delete_slot),
        )
        .route("/calendars/{id}/occurrences", get(list_occurrences))
        .route("/recurring/update", post(advance_anchor))
}
