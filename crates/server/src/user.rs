//! Login endpoint

use api_types::{
    Status,
    user::{AttemptLogin, LoginResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{ServerError, server::ServerState, views::map_user};

/// Resolve the user behind a `netId`. There is no password: the client
/// asserts its identity.
pub async fn attempt_login(
    State(state): State<ServerState>,
    payload: Result<Json<AttemptLogin>, JsonRejection>,
) -> Result<Json<LoginResponse>, ServerError> {
    tracing::info!("Attempt login");
    let Json(payload) = payload?;
    let user = state.engine.login(payload.net_id).await?;

    Ok(Json(LoginResponse {
        status: Status::Success,
        user: map_user(user),
    }))
}
