use thiserror::Error;

use super::messages::{Rejection, Subject};

/// Errors produced by the employee, task and history services.
#[derive(Debug, Error)]
pub enum OrganizerError {
    /// The client sent missing, malformed or conflicting data.
    #[error("{0}")]
    Invalid(Rejection),
    /// A referenced record does not resolve.
    #[error("{0}")]
    NotFound(Rejection),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl OrganizerError {
    pub fn not_found(subject: Subject) -> Self {
        Self::NotFound(Rejection::NotFound(subject))
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<sqlx::Error> for OrganizerError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
