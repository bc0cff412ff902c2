use api_types::{ErrorKind, ErrorResponse, Status};
use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod attendance;
mod events;
mod scans;
mod server;
mod summaries;
mod user;
mod views;

pub enum ServerError {
    Engine(EngineError),
    /// Failure on our side that has nothing to do with the store.
    Internal(String),
}

fn kind_for_engine_error(err: &EngineError) -> (StatusCode, ErrorKind) {
    match err {
        EngineError::InsufficientData(_) => (StatusCode::BAD_REQUEST, ErrorKind::InsufficientData),
        EngineError::DuplicateScan(_) => (StatusCode::CONFLICT, ErrorKind::DuplicateScan),
        EngineError::NoUser(_) => (StatusCode::NOT_FOUND, ErrorKind::NoUser),
        EngineError::InvalidRecord(_) | EngineError::Database(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::UnknownError)
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::InvalidRecord(record) => {
            tracing::error!("invalid record in store: {record}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error, message) = match self {
            ServerError::Engine(err) => {
                let (status, error) = kind_for_engine_error(&err);
                (status, error, message_for_engine_error(err))
            }
            ServerError::Internal(err) => {
                tracing::error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::UnknownError,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                status: Status::Error,
                error,
                message,
            }),
        )
            .into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// A body that is not JSON, or has a field of the wrong type, is reported
/// like any other unusable input.
impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Engine(EngineError::InsufficientData(value.body_text()))
    }
}
