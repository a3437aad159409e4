use chrono::NaiveDate;
use game_types::{GameError, UserGame, UserStats};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use super::puzzle_repository::increment_puzzle_stats;
use super::user_stats_repository::upsert_stats;
use crate::entities::{prelude::UserGames, user_games};
use crate::{corrupt_row, store_error};

pub struct UserGameRepository {
    db: DatabaseConnection,
}

impl UserGameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_game(model: user_games::Model) -> Result<UserGame, GameError> {
        let date = model
            .date
            .parse::<NaiveDate>()
            .map_err(|e| corrupt_row("user game", e))?;
        let guessed_golfer_ids: Vec<String> =
            serde_json::from_str(&model.guessed_golfer_ids).map_err(|e| corrupt_row("user game", e))?;

        Ok(UserGame {
            user_id: model.user_id,
            date,
            golfer_id: model.golfer_id,
            guessed_golfer_ids,
            won: model.won,
            guesses: model.guesses as u32,
            completed_at: model.completed_at.to_rfc3339(),
        })
    }

    pub async fn get(&self, user_id: &str, date: NaiveDate) -> Result<Option<UserGame>, GameError> {
        let model = UserGames::find_by_id((user_id.to_string(), date.to_string()))
            .one(&self.db)
            .await
            .map_err(store_error)?;

        model.map(Self::model_to_game).transpose()
    }

    /// Store a finished round. Each user has at most one round per day; a
    /// second write for the same day is rejected.
    pub async fn put(&self, game: &UserGame) -> Result<(), GameError> {
        insert_game(&self.db, game).await
    }

    /// Store a finished round together with the stats it produced and count
    /// it against the day's puzzle, in one transaction. Nothing is written if
    /// the round was already recorded or the puzzle does not exist.
    pub async fn record_round(&self, stats: &UserStats, game: &UserGame) -> Result<(), GameError> {
        let txn = self.db.begin().await.map_err(store_error)?;

        // Dropping `txn` on an early return rolls everything back
        insert_game(&txn, game).await?;
        upsert_stats(&txn, stats).await?;
        increment_puzzle_stats(&txn, game.date, game.won).await?;

        txn.commit().await.map_err(store_error)
    }
}

async fn insert_game<C: ConnectionTrait>(conn: &C, game: &UserGame) -> Result<(), GameError> {
    let guessed_golfer_ids =
        serde_json::to_string(&game.guessed_golfer_ids).map_err(|e| GameError::store(e.to_string()))?;
    let completed_at = chrono::DateTime::parse_from_rfc3339(&game.completed_at).map_err(|e| {
        GameError::store(format!("invalid completedAt '{}': {}", game.completed_at, e))
    })?;

    let model = user_games::ActiveModel {
        user_id: Set(game.user_id.clone()),
        date: Set(game.date.to_string()),
        golfer_id: Set(game.golfer_id.clone()),
        guessed_golfer_ids: Set(guessed_golfer_ids),
        won: Set(game.won),
        guesses: Set(game.guesses as i32),
        completed_at: Set(completed_at),
    };

    let inserted = UserGames::insert(model)
        .on_conflict(
            OnConflict::columns([user_games::Column::UserId, user_games::Column::Date])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(store_error)?;

    if inserted == 0 {
        return Err(GameError::RoundAlreadyCompleted {
            user_id: game.user_id.clone(),
            date: game.date.to_string(),
        });
    }
    Ok(())
}
