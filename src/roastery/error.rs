use crate::list_view::SelectionError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoasteryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RoasteryError {
    /// Errors the user can fix by changing their input, as opposed to store trouble.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RoasteryError::Validation(_) | RoasteryError::Selection(_) | RoasteryError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RoasteryError>;
