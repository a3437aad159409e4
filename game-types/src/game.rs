use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GolferId, UserId};

/// Outcome of comparing one attribute of a guessed golfer with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AttributeOutcome {
    Exact,  // Same value
    Close,  // Numeric value within tolerance
    Higher, // Guess is higher than the target
    Lower,  // Guess is lower than the target
    None,   // No match, or a value is unknown
}

/// Per-attribute feedback for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuessComparison {
    pub age: AttributeOutcome,
    pub country: AttributeOutcome,
    pub height: AttributeOutcome,
    pub turned_pro: AttributeOutcome,
    pub education: AttributeOutcome,
    pub is_active: AttributeOutcome,
}

/// The target golfer chosen for one calendar day, plus play counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyPuzzle {
    pub date: NaiveDate,
    pub id: GolferId,
    pub golfer_id: String,
    pub golfer_name: String,
    pub total_plays: i64,
    pub total_wins: i64,
    pub created_at: String, // ISO 8601 string
}

/// Write-once record of a finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserGame {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub golfer_id: String,
    pub guessed_golfer_ids: Vec<String>,
    pub won: bool,
    pub guesses: u32,
    pub completed_at: String, // ISO 8601 string
}
