use crate::model::UserId;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserdirError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User already exists: {0}")]
    DuplicateUser(UserId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No user is being edited")]
    NoOpenSession,

    #[error("Another user is already being edited")]
    SessionAlreadyOpen,

    #[error("No user matches: {0}")]
    InvalidSelector(String),

    #[error("More than one user matches: {0}")]
    AmbiguousSelector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, UserdirError>;
