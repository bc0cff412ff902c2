//! The module contains the errors the engine can throw.
//!
//! - [`InsufficientData`] thrown when a request misses a required field or
//!   carries a value that cannot be stored.
//! - [`DuplicateScan`] thrown when a user is scanned twice for one event.
//! - [`NoUser`] thrown when a login names an unknown user.
//!
//!  [`InsufficientData`]: EngineError::InsufficientData
//!  [`DuplicateScan`]: EngineError::DuplicateScan
//!  [`NoUser`]: EngineError::NoUser
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
    #[error("Duplicate scan: {0}")]
    DuplicateScan(String),
    #[error("\"{0}\" user not found!")]
    NoUser(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InsufficientData(a), Self::InsufficientData(b)) => a == b,
            (Self::DuplicateScan(a), Self::DuplicateScan(b)) => a == b,
            (Self::NoUser(a), Self::NoUser(b)) => a == b,
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
