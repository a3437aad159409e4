use std::collections::HashSet;

use chrono::NaiveDate;
use game_types::{DailyPuzzle, GameError, Golfer, GolferId};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use tracing::info;

use crate::entities::{daily_puzzles, prelude::DailyPuzzles};
use crate::{corrupt_row, store_error};

pub struct PuzzleRepository {
    db: DatabaseConnection,
}

impl PuzzleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_puzzle(model: daily_puzzles::Model) -> Result<DailyPuzzle, GameError> {
        let date = model
            .date
            .parse::<NaiveDate>()
            .map_err(|e| corrupt_row("daily puzzle", e))?;

        Ok(DailyPuzzle {
            date,
            id: model.id,
            golfer_id: model.golfer_id,
            golfer_name: model.golfer_name,
            total_plays: model.total_plays,
            total_wins: model.total_wins,
            created_at: model.created_at.to_rfc3339(),
        })
    }

    pub async fn get(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>, GameError> {
        let model = DailyPuzzles::find_by_id(date.to_string())
            .one(&self.db)
            .await
            .map_err(store_error)?;

        model.map(Self::model_to_puzzle).transpose()
    }

    /// Store `golfer` as the puzzle for `date` unless a puzzle already exists.
    ///
    /// The insert is conditional on the date key, so when several requests
    /// race to create the same day's puzzle exactly one wins and everyone
    /// reads back the winner. The flag is true only for the request whose
    /// insert took effect.
    pub async fn create(&self, date: NaiveDate, golfer: &Golfer) -> Result<(DailyPuzzle, bool), GameError> {
        let puzzle = daily_puzzles::ActiveModel {
            date: Set(date.to_string()),
            id: Set(golfer.id.clone()),
            golfer_id: Set(golfer.player_id.clone()),
            golfer_name: Set(golfer.name.clone()),
            total_plays: Set(0),
            total_wins: Set(0),
            created_at: Set(chrono::Utc::now().into()),
        };

        let inserted = DailyPuzzles::insert(puzzle)
            .on_conflict(
                OnConflict::column(daily_puzzles::Column::Date)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(store_error)?;

        let stored = self
            .get(date)
            .await?
            .ok_or_else(|| GameError::store("puzzle missing after insert"))?;

        if inserted > 0 {
            info!("Created daily puzzle for {}: {}", date, stored.golfer_name);
        }

        Ok((stored, inserted > 0))
    }

    /// Ids of every golfer that has been a daily target.
    pub async fn list_used_golfer_ids(&self) -> Result<HashSet<GolferId>, GameError> {
        let ids = DailyPuzzles::find()
            .select_only()
            .column(daily_puzzles::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(ids.into_iter().collect())
    }

    /// Count one finished round against the day's puzzle.
    pub async fn increment_stats(&self, date: NaiveDate, won: bool) -> Result<(), GameError> {
        increment_puzzle_stats(&self.db, date, won).await
    }
}

/// Single `UPDATE` so concurrent rounds never lose an increment. Generic over
/// the connection so a finished round can count itself inside its own
/// transaction.
pub(crate) async fn increment_puzzle_stats<C: ConnectionTrait>(
    conn: &C,
    date: NaiveDate,
    won: bool,
) -> Result<(), GameError> {
    let result = DailyPuzzles::update_many()
        .col_expr(
            daily_puzzles::Column::TotalPlays,
            Expr::col(daily_puzzles::Column::TotalPlays).add(1),
        )
        .col_expr(
            daily_puzzles::Column::TotalWins,
            Expr::col(daily_puzzles::Column::TotalWins).add(i64::from(won)),
        )
        .filter(daily_puzzles::Column::Date.eq(date.to_string()))
        .exec(conn)
        .await
        .map_err(store_error)?;

    if result.rows_affected == 0 {
        return Err(GameError::PuzzleNotFound {
            date: date.to_string(),
        });
    }
    Ok(())
}
