//! Event API endpoints

use api_types::{
    Status,
    event::{CreateEvent, EventCreated, EventsResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;

use crate::{ServerError, server::ServerState, views::map_event};

/// Handle requests for events that have not started yet or started
/// recently
pub async fn upcoming(
    State(state): State<ServerState>,
) -> Result<Json<EventsResponse>, ServerError> {
    tracing::info!("Upcoming events");
    let events = state
        .engine
        .upcoming_events(Utc::now())
        .await?
        .into_iter()
        .map(map_event)
        .collect();

    Ok(Json(EventsResponse {
        status: Status::Success,
        events,
    }))
}

/// Handle requests for creating new events
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<EventCreated>), ServerError> {
    tracing::info!("Create event");
    let Json(payload) = payload?;
    let event = state
        .engine
        .create_event(
            engine::EventDraft {
                title: payload.title,
                kind: payload.kind,
                notes: payload.notes,
                start_time: payload.start_time.map(|dt| dt.with_timezone(&Utc)),
                end_time: payload.end_time.map(|dt| dt.with_timezone(&Utc)),
                location: payload.location,
                created_by: payload.created_by,
                waiver_url: payload.waiver_url,
            },
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EventCreated {
            status: Status::Success,
            event_id: event.id,
        }),
    ))
}
