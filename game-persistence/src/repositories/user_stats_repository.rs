use std::collections::BTreeMap;

use chrono::NaiveDate;
use game_types::{GameError, UserStats};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait};

use crate::entities::{prelude::UserStats as UserStatsEntity, user_stats};
use crate::{corrupt_row, store_error};

pub struct UserStatsRepository {
    db: DatabaseConnection,
}

impl UserStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_stats(model: user_stats::Model) -> Result<UserStats, GameError> {
        let guess_distribution: BTreeMap<u32, u32> =
            serde_json::from_str(&model.guess_distribution).map_err(|e| corrupt_row("user stats", e))?;
        let last_played_date = model
            .last_played_date
            .map(|date| date.parse::<NaiveDate>())
            .transpose()
            .map_err(|e| corrupt_row("user stats", e))?;

        Ok(UserStats {
            user_id: model.user_id,
            games_played: model.games_played as u32,
            games_won: model.games_won as u32,
            current_streak: model.current_streak as u32,
            max_streak: model.max_streak as u32,
            guess_distribution,
            last_played_date,
        })
    }

    /// Stats for `user_id`, or fresh zeroed stats if the player has none yet.
    pub async fn get(&self, user_id: &str) -> Result<UserStats, GameError> {
        let model = UserStatsEntity::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        match model {
            Some(model) => Self::model_to_stats(model),
            None => Ok(UserStats::new(user_id)),
        }
    }

    /// Replace the stored stats record with `stats`.
    pub async fn put(&self, stats: &UserStats) -> Result<(), GameError> {
        upsert_stats(&self.db, stats).await
    }
}

pub(crate) async fn upsert_stats<C: ConnectionTrait>(conn: &C, stats: &UserStats) -> Result<(), GameError> {
    let guess_distribution =
        serde_json::to_string(&stats.guess_distribution).map_err(|e| GameError::store(e.to_string()))?;

    let model = user_stats::ActiveModel {
        user_id: Set(stats.user_id.clone()),
        games_played: Set(stats.games_played as i32),
        games_won: Set(stats.games_won as i32),
        current_streak: Set(stats.current_streak as i32),
        max_streak: Set(stats.max_streak as i32),
        guess_distribution: Set(guess_distribution),
        last_played_date: Set(stats.last_played_date.map(|date| date.to_string())),
        updated_at: Set(chrono::Utc::now().into()),
    };

    UserStatsEntity::insert(model)
        .on_conflict(
            OnConflict::column(user_stats::Column::UserId)
                .update_columns([
                    user_stats::Column::GamesPlayed,
                    user_stats::Column::GamesWon,
                    user_stats::Column::CurrentStreak,
                    user_stats::Column::MaxStreak,
                    user_stats::Column::GuessDistribution,
                    user_stats::Column::LastPlayedDate,
                    user_stats::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(store_error)?;

    Ok(())
}
