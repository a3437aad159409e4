use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use rand::rngs::StdRng;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::catalog::GolferSource;
use game_core::{
    CompletedRound, MAX_GUESSES, PuzzleSelector, ScoringEngine, StatsEngine, is_correct_guess,
    is_game_over,
};
use game_persistence::{PuzzleRepository, UserGameRepository, UserStatsRepository};
use game_types::{
    DailyPuzzle, DailyPuzzleResponse, GameError, GuessComparison, PuzzleAnswer, SubmitGuessRequest,
    SubmitGuessResponse, UserGame, UserStats,
};

/// Result of looking up a day's puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleFetch {
    pub puzzle: DailyPuzzle,
    /// True when this call created the puzzle.
    pub created: bool,
}

impl PuzzleFetch {
    pub fn into_response(self) -> DailyPuzzleResponse {
        if self.created {
            DailyPuzzleResponse::Created {
                date: self.puzzle.date,
                golfer_id: self.puzzle.golfer_id,
            }
        } else {
            DailyPuzzleResponse::Existing {
                date: self.puzzle.date,
                id: self.puzzle.id,
            }
        }
    }
}

/// A guess submission with every required field present and in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGuess {
    pub user_id: String,
    pub guessed_golfer_id: String,
    pub guess_count: u32,
    pub guessed_golfer_ids: Vec<String>,
}

impl TryFrom<SubmitGuessRequest> for ValidatedGuess {
    type Error = GameError;

    fn try_from(request: SubmitGuessRequest) -> Result<Self, Self::Error> {
        let missing = || GameError::validation("Missing required parameters");

        let user_id = request.user_id.filter(|id| !id.trim().is_empty()).ok_or_else(missing)?;
        let guessed_golfer_id = request
            .guessed_golfer_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(missing)?;
        let guess_count = request.guess_count.ok_or_else(missing)?;
        let guessed_golfer_ids = request.guessed_golfer_ids.ok_or_else(missing)?;

        if guess_count == 0 || guess_count > MAX_GUESSES {
            return Err(GameError::validation(format!(
                "guessCount must be between 1 and {}",
                MAX_GUESSES
            )));
        }

        Ok(Self {
            user_id,
            guessed_golfer_id,
            guess_count,
            guessed_golfer_ids,
        })
    }
}

pub struct GameManager {
    puzzles: PuzzleRepository,
    user_stats: UserStatsRepository,
    user_games: UserGameRepository,
    golfers: Arc<dyn GolferSource>,
    rng: Mutex<StdRng>,
    // Serializes puzzle creation inside this process; the store's
    // conditional insert covers other processes.
    puzzle_creation: Mutex<()>,
    user_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GameManager {
    pub fn new(db: DatabaseConnection, golfers: Arc<dyn GolferSource>, rng: StdRng) -> Self {
        Self {
            puzzles: PuzzleRepository::new(db.clone()),
            user_stats: UserStatsRepository::new(db.clone()),
            user_games: UserGameRepository::new(db),
            golfers,
            rng: Mutex::new(rng),
            puzzle_creation: Mutex::new(()),
            user_locks: DashMap::new(),
        }
    }

    /// Return the puzzle for `date`, choosing a new target golfer if the day
    /// has none yet.
    pub async fn get_or_create_puzzle(&self, date: NaiveDate) -> Result<PuzzleFetch, GameError> {
        if let Some(puzzle) = self.puzzles.get(date).await? {
            return Ok(PuzzleFetch {
                puzzle,
                created: false,
            });
        }

        let _creation = self.puzzle_creation.lock().await;

        // Another request may have created it while we waited
        if let Some(puzzle) = self.puzzles.get(date).await? {
            return Ok(PuzzleFetch {
                puzzle,
                created: false,
            });
        }

        info!("Daily puzzle for {} does not exist, creating", date);

        let golfers = self.golfers.fetch_golfers().await?;
        let used_ids = self.puzzles.list_used_golfer_ids().await?;
        let selected = {
            let mut rng = self.rng.lock().await;
            PuzzleSelector::select(&golfers, &used_ids, &mut *rng)?.clone()
        };

        let (puzzle, created) = self.puzzles.create(date, &selected).await?;
        Ok(PuzzleFetch { puzzle, created })
    }

    /// Evaluate one guess against the puzzle for `date`. When the guess ends
    /// the round, the player's stats, the round record and the puzzle
    /// counters are all updated before returning.
    pub async fn submit_guess(
        &self,
        date: NaiveDate,
        request: SubmitGuessRequest,
    ) -> Result<SubmitGuessResponse, GameError> {
        let guess = ValidatedGuess::try_from(request)?;

        let puzzle = self
            .puzzles
            .get(date)
            .await?
            .ok_or_else(|| GameError::PuzzleNotFound {
                date: date.to_string(),
            })?;

        if self.user_games.get(&guess.user_id, date).await?.is_some() {
            return Err(GameError::RoundAlreadyCompleted {
                user_id: guess.user_id,
                date: date.to_string(),
            });
        }

        let is_correct = is_correct_guess(&guess.guessed_golfer_id, &puzzle.golfer_id);
        let game_over = is_game_over(guess.guess_count, is_correct);
        let comparison = self.compare_with_target(&guess.guessed_golfer_id, &puzzle).await;

        debug!(
            "User {} guess {} on {}: correct={}, game_over={}",
            guess.user_id, guess.guess_count, date, is_correct, game_over
        );

        if game_over {
            self.finish_round(date, &puzzle, &guess, is_correct).await?;
        }

        Ok(SubmitGuessResponse {
            is_correct,
            game_over,
            answer: game_over.then(|| PuzzleAnswer {
                golfer_id: puzzle.golfer_id.clone(),
                golfer_name: puzzle.golfer_name.clone(),
            }),
            comparison,
        })
    }

    pub async fn user_stats(&self, user_id: &str) -> Result<UserStats, GameError> {
        self.user_stats.get(user_id).await
    }

    pub async fn user_game(&self, user_id: &str, date: NaiveDate) -> Result<Option<UserGame>, GameError> {
        self.user_games.get(user_id, date).await
    }

    /// Attribute feedback for the guess, when both golfers are in the catalog.
    /// The feedback is optional, so a catalog failure only drops it.
    async fn compare_with_target(
        &self,
        guessed_golfer_id: &str,
        puzzle: &DailyPuzzle,
    ) -> Option<GuessComparison> {
        let golfers = match self.golfers.fetch_golfers().await {
            Ok(golfers) => golfers,
            Err(err) => {
                warn!("Skipping guess comparison for {}: {}", puzzle.date, err);
                return None;
            }
        };

        let guessed = golfers.iter().find(|g| g.player_id == guessed_golfer_id)?;
        let target = golfers.iter().find(|g| g.id == puzzle.id)?;
        Some(ScoringEngine::compare_golfers(guessed, target))
    }

    async fn finish_round(
        &self,
        date: NaiveDate,
        puzzle: &DailyPuzzle,
        guess: &ValidatedGuess,
        won: bool,
    ) -> Result<(), GameError> {
        let user_lock = self.user_lock(&guess.user_id);
        let result = {
            let _guard = user_lock.lock().await;
            self.record_round(date, puzzle, guess, won).await
        };

        drop(user_lock);
        // Nobody else holds or waits on the lock once the map has the only handle
        self.user_locks
            .remove_if(&guess.user_id, |_, lock| Arc::strong_count(lock) == 1);

        result
    }

    /// Must run under the player's lock.
    async fn record_round(
        &self,
        date: NaiveDate,
        puzzle: &DailyPuzzle,
        guess: &ValidatedGuess,
        won: bool,
    ) -> Result<(), GameError> {
        info!("Game over for user {} on {}. Updating stats...", guess.user_id, date);

        let current = self.user_stats.get(&guess.user_id).await?;
        if StatsEngine::precedes_last_played(&current, date) {
            return Err(GameError::validation(format!(
                "Cannot record a round for {} after playing {}",
                date,
                current.last_played_date.map(|d| d.to_string()).unwrap_or_default()
            )));
        }

        let round = CompletedRound::new(
            &current,
            &puzzle.golfer_id,
            guess.guessed_golfer_ids.clone(),
            won,
            guess.guess_count,
            date,
            Utc::now(),
        );

        // Stats, round record and puzzle counters commit together
        self.user_games.record_round(&round.stats, &round.game).await?;

        info!(
            "Saved round for user {} on {}: won={}, streak={}",
            guess.user_id, date, won, round.stats.current_streak
        );
        Ok(())
    }

    /// Players whose finished round is being recorded right now.
    pub fn active_user_locks(&self) -> usize {
        self.user_locks.len()
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.user_locks.entry(user_id.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SubmitGuessRequest {
        SubmitGuessRequest {
            user_id: Some("user-1".to_string()),
            guessed_golfer_id: Some("tiger-woods".to_string()),
            guess_count: Some(2),
            guessed_golfer_ids: Some(vec!["rory-mcilroy".to_string(), "tiger-woods".to_string()]),
        }
    }

    #[test]
    fn test_valid_request() {
        let guess = ValidatedGuess::try_from(full_request()).unwrap();
        assert_eq!(guess.user_id, "user-1");
        assert_eq!(guess.guess_count, 2);
        assert_eq!(guess.guessed_golfer_ids.len(), 2);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let cases = [
            SubmitGuessRequest { user_id: None, ..full_request() },
            SubmitGuessRequest { user_id: Some("  ".to_string()), ..full_request() },
            SubmitGuessRequest { guessed_golfer_id: None, ..full_request() },
            SubmitGuessRequest { guess_count: None, ..full_request() },
            SubmitGuessRequest { guessed_golfer_ids: None, ..full_request() },
        ];

        for request in cases {
            assert_eq!(
                ValidatedGuess::try_from(request).unwrap_err(),
                GameError::validation("Missing required parameters")
            );
        }
    }

    #[test]
    fn test_guess_count_out_of_range() {
        for count in [0, 7, 100] {
            let request = SubmitGuessRequest {
                guess_count: Some(count),
                ..full_request()
            };
            assert!(matches!(
                ValidatedGuess::try_from(request),
                Err(GameError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_empty_guess_history_is_allowed() {
        let request = SubmitGuessRequest {
            guessed_golfer_ids: Some(Vec::new()),
            ..full_request()
        };
        assert!(ValidatedGuess::try_from(request).is_ok());
    }
}
