//! Per-user attendance endpoints

use api_types::{
    Status,
    attendance::{UserAttendanceResponse, UserPunchesResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    ServerError,
    server::ServerState,
    views::{map_event, map_punch, map_scan},
};

pub async fn user_attendance(
    State(state): State<ServerState>,
    Path(net_id): Path<String>,
) -> Result<Json<UserAttendanceResponse>, ServerError> {
    tracing::info!("User attendance");
    let attendance = state.engine.user_attendance(&net_id).await?;

    Ok(Json(UserAttendanceResponse {
        status: Status::Success,
        scans: attendance.scans.into_iter().map(map_scan).collect(),
        events: attendance.events.into_iter().map(map_event).collect(),
    }))
}

pub async fn user_punches(
    State(state): State<ServerState>,
    Path(net_id): Path<String>,
) -> Result<Json<UserPunchesResponse>, ServerError> {
    tracing::info!("User punches");
    let card = state.engine.user_punches(&net_id).await?;

    Ok(Json(UserPunchesResponse {
        status: Status::Success,
        punches: card.punches.into_iter().map(map_punch).collect(),
        raffle_eligible: card.raffle_eligible,
    }))
}
