use chrono::NaiveDate;
use game_types::UserStats;

use crate::is_consecutive_day;

pub struct StatsEngine;

impl StatsEngine {
    /// True when `date` is earlier than the player's last played day. Such a
    /// round cannot be folded in without moving `last_played_date` backwards.
    pub fn precedes_last_played(current: &UserStats, date: NaiveDate) -> bool {
        current
            .last_played_date
            .is_some_and(|last_played| date < last_played)
    }

    /// Fold one finished round into a player's statistics.
    ///
    /// Returns a complete replacement record. A loss always resets the
    /// current streak; a win extends it only when `date` is the calendar day
    /// after the last played day (or when nothing has been played yet).
    pub fn calculate_new_stats(
        current: &UserStats,
        won: bool,
        guess_count: u32,
        date: NaiveDate,
    ) -> UserStats {
        let continues_streak = match current.last_played_date {
            Some(last_played) => is_consecutive_day(last_played, date),
            None => true,
        };

        let current_streak = match (won, continues_streak) {
            (true, true) => current.current_streak + 1,
            (true, false) => 1,
            (false, _) => 0,
        };

        let mut guess_distribution = current.guess_distribution.clone();
        if won {
            *guess_distribution.entry(guess_count).or_insert(0) += 1;
        }

        UserStats {
            user_id: current.user_id.clone(),
            games_played: current.games_played + 1,
            games_won: current.games_won + u32::from(won),
            current_streak,
            max_streak: current.max_streak.max(current_streak),
            guess_distribution,
            last_played_date: Some(date),
        }
    }
}
