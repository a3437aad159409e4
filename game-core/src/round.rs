use chrono::{DateTime, NaiveDate, Utc};
use game_types::{UserGame, UserStats};

use crate::StatsEngine;

/// Guesses allowed in one round.
pub const MAX_GUESSES: u32 = 6;

pub fn is_correct_guess(guessed_golfer_id: &str, target_golfer_id: &str) -> bool {
    guessed_golfer_id == target_golfer_id
}

/// A round ends on a correct guess or once the last allowed guess is used.
/// `guess_count` is 1-based.
pub fn is_game_over(guess_count: u32, is_correct: bool) -> bool {
    is_correct || guess_count >= MAX_GUESSES
}

/// The two records produced when a round finishes. Both are built from the
/// same outcome so they always agree on `won` and the guess count.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRound {
    pub stats: UserStats,
    pub game: UserGame,
}

impl CompletedRound {
    pub fn new(
        current_stats: &UserStats,
        target_golfer_id: &str,
        guessed_golfer_ids: Vec<String>,
        won: bool,
        guess_count: u32,
        date: NaiveDate,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let stats = StatsEngine::calculate_new_stats(current_stats, won, guess_count, date);
        let game = UserGame {
            user_id: current_stats.user_id.clone(),
            date,
            golfer_id: target_golfer_id.to_string(),
            guessed_golfer_ids,
            won,
            guesses: guess_count,
            completed_at: completed_at.to_rfc3339(),
        };

        Self { stats, game }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_rules() {
        assert!(is_game_over(1, true));
        assert!(is_game_over(6, false));
        assert!(!is_game_over(3, false));
        assert!(!is_game_over(5, false));
        assert!(is_game_over(4, true));
    }

    #[test]
    fn test_correct_guess() {
        assert!(is_correct_guess("tiger-woods", "tiger-woods"));
        assert!(!is_correct_guess("rory-mcilroy", "tiger-woods"));
        assert!(!is_correct_guess("Tiger-Woods", "tiger-woods"));
    }

    #[test]
    fn test_completed_round_records_agree() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let stats = UserStats::new("user-1");
        let guesses = vec!["rory-mcilroy".to_string(), "tiger-woods".to_string()];

        let round = CompletedRound::new(&stats, "tiger-woods", guesses.clone(), true, 2, date, Utc::now());

        assert_eq!(round.game.user_id, "user-1");
        assert!(round.game.won);
        assert_eq!(round.game.guesses, 2);
        assert_eq!(round.game.guessed_golfer_ids, guesses);
        assert_eq!(round.stats.games_won, 1);
        assert_eq!(round.stats.guess_distribution.get(&2), Some(&1));
        assert_eq!(round.stats.last_played_date, Some(round.game.date));
    }
}
