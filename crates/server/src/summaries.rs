//! Organiser dashboard endpoints

use api_types::{
    Status,
    summary::{EventSummaries, EventSummariesResponse, ScansPerEvent},
};
use axum::{Json, extract::State, http::header, response::IntoResponse};
use csv::Writer;
use serde::Serialize;

use crate::{ServerError, server::ServerState};

const RAFFLE_FILE_NAME: &str = "raffleEligibleStudents.csv";

/// Handle requests for the organiser dashboard figures
pub async fn event_summaries(
    State(state): State<ServerState>,
) -> Result<Json<EventSummariesResponse>, ServerError> {
    tracing::info!("Event summaries");
    let summaries = state.engine.event_summaries().await?;

    let scans_per_event = summaries
        .scans_per_event
        .into_iter()
        .map(|count| {
            (
                count.event_id,
                ScansPerEvent {
                    num_scans: count.num_scans,
                    name: count.name,
                    date: count.date,
                },
            )
        })
        .collect();

    Ok(Json(EventSummariesResponse {
        status: Status::Success,
        event_summaries: EventSummaries {
            scans_per_event,
            total_attendance: summaries.total_attendance,
            raffle_eligible_students: summaries.raffle_eligible_students,
        },
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RaffleRow {
    net_id: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
}

/// Handle requests for the raffle list as a CSV download
pub async fn student_raffle(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    tracing::info!("Student raffle");
    let users = state.engine.raffle_users().await?;

    let mut writer = Writer::from_writer(vec![]);
    for user in users {
        writer
            .serialize(RaffleRow {
                net_id: user.net_id,
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
            })
            .map_err(|err| {
                ServerError::Internal(format!("failed to serialize raffle row: {err}"))
            })?;
    }
    let data = writer
        .into_inner()
        .map_err(|err| {
            ServerError::Internal(format!("failed to finalize raffle export: {err}"))
        })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RAFFLE_FILE_NAME}\""),
            ),
        ],
        data,
    ))
}
