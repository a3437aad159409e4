use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GolferId, GuessComparison};

/// Body of `GET /puzzle`.
///
/// An already stored puzzle answers with its target `id`; a puzzle created by
/// this request answers with the target's `golferId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum DailyPuzzleResponse {
    Existing {
        date: NaiveDate,
        id: GolferId,
    },
    Created {
        date: NaiveDate,
        #[serde(rename = "golferId")]
        golfer_id: String,
    },
}

/// Body of `POST /guess`. Every field is optional on the wire so that a
/// missing field is reported as a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitGuessRequest {
    pub user_id: Option<String>,
    pub guessed_golfer_id: Option<String>,
    pub guess_count: Option<u32>,
    pub guessed_golfer_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PuzzleAnswer {
    pub golfer_id: String,
    pub golfer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitGuessResponse {
    pub is_correct: bool,
    pub game_over: bool,
    /// Revealed only once the round is over.
    pub answer: Option<PuzzleAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<GuessComparison>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_response_shapes() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();

        let existing = DailyPuzzleResponse::Existing {
            date,
            id: "46046".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&existing).unwrap(),
            serde_json::json!({"date": "2025-01-05", "id": "46046"})
        );

        let created = DailyPuzzleResponse::Created {
            date,
            golfer_id: "scottie-scheffler".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            serde_json::json!({"date": "2025-01-05", "golferId": "scottie-scheffler"})
        );
    }

    #[test]
    fn test_partial_guess_request_parses() {
        let request: SubmitGuessRequest =
            serde_json::from_str(r#"{"userId": "u1", "guessCount": 2}"#).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.guess_count, Some(2));
        assert!(request.guessed_golfer_id.is_none());
        assert!(request.guessed_golfer_ids.is_none());
    }

    #[test]
    fn test_answer_is_null_while_playing() {
        let response = SubmitGuessResponse {
            is_correct: false,
            game_over: false,
            answer: None,
            comparison: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["answer"], serde_json::Value::Null);
        assert!(json.get("comparison").is_none());
    }
}
