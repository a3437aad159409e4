use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::UserId;

/// Cumulative statistics for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserStats {
    pub user_id: UserId,
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins keyed by the guess number they happened on.
    pub guess_distribution: BTreeMap<u32, u32>,
    pub last_played_date: Option<NaiveDate>,
}

impl UserStats {
    /// Stats for a player who has never finished a round.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: BTreeMap::new(),
            last_played_date: None,
        }
    }

    pub fn total_distributed_wins(&self) -> u32 {
        self.guess_distribution.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = UserStats::new("user-1");
        assert_eq!(stats.user_id, "user-1");
        assert_eq!(stats.games_played, 0);
        assert!(stats.guess_distribution.is_empty());
        assert!(stats.last_played_date.is_none());
    }

    #[test]
    fn test_wire_format() {
        let mut stats = UserStats::new("user-1");
        stats.guess_distribution.insert(3, 2);
        stats.last_played_date = NaiveDate::from_ymd_opt(2024, 12, 23);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["lastPlayedDate"], "2024-12-23");
        assert_eq!(json["guessDistribution"]["3"], 2);
        assert_eq!(json["gamesPlayed"], 0);
    }
}
