use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Every failure the game can surface. Pure components fail fast with one of
/// these; store and catalog failures are passed upward unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    /// No golfer in the catalog is eligible to be a daily target.
    #[error("No golfers available to create a daily puzzle")]
    EmptyPool,
    #[error("Daily puzzle not found for {date}")]
    PuzzleNotFound { date: String },
    #[error("Invalid request: {message}")]
    Validation { message: String },
    #[error("User {user_id} already completed the puzzle for {date}")]
    RoundAlreadyCompleted { user_id: String, date: String },
    #[error("Storage failure: {message}")]
    Store { message: String },
    #[error("Golfer catalog unavailable: {message}")]
    Catalog { message: String },
}

impl GameError {
    pub fn validation(message: impl Into<String>) -> Self {
        GameError::Validation {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        GameError::Store {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        GameError::Catalog {
            message: message.into(),
        }
    }
}
