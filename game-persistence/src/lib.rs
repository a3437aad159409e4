pub mod connection;
pub mod entities;
pub mod repositories;

use game_types::GameError;
use sea_orm::DbErr;

pub use repositories::{PuzzleRepository, UserGameRepository, UserStatsRepository};

/// Database failures are logged here and surfaced as a generic store error,
/// so driver detail never reaches API clients.
pub(crate) fn store_error(err: DbErr) -> GameError {
    tracing::error!("Database error: {}", err);
    GameError::store("database operation failed")
}

pub(crate) fn corrupt_row(what: &str, detail: impl std::fmt::Display) -> GameError {
    tracing::error!("Corrupt {} row: {}", what, detail);
    GameError::store(format!("corrupt {} record", what))
}
