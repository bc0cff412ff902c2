use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use std::sync::Arc;

use crate::{attendance, events, scans, summaries, user};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Every endpoint, with cross-origin requests allowed from anywhere.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/GetScans", get(scans::list))
        .route("/InsertScan", post(scans::insert))
        .route(
            "/GetUserAttendance/{net_id}",
            get(attendance::user_attendance),
        )
        .route("/GetUserPunches/{net_id}", get(attendance::user_punches))
        .route("/GetUpcomingEvents", get(events::upcoming))
        .route("/GetEventSummaries", get(summaries::event_summaries))
        .route("/StudentRaffle", get(summaries::student_raffle))
        .route("/CreateEvent", post(events::create))
        .route("/AttemptLogin", post(user::attempt_login))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
