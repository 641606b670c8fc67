use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Participant, ParticipantsResponse},
};

#[utoipa::path(get, path = "/api/participants", responses((status = 200, body = ParticipantsResponse)))]
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ParticipantsResponse>> {
    let participants = state.participant_service.get_participants()?;
    Ok(Json(ParticipantsResponse {
        participants: participants.into_iter().map(Participant::from).collect(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/participants", get(list_participants))
}
