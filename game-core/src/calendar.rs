//! Calendar-day helpers. Every date in the game is a UTC `YYYY-MM-DD` day
//! with no time component.

use chrono::{NaiveDate, Utc};
use game_types::GameError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, GameError> {
    let value = value.trim();
    let invalid = || GameError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", value));

    if value.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// True when the two days are exactly one calendar day apart.
pub fn is_consecutive_day(previous: NaiveDate, current: NaiveDate) -> bool {
    current.signed_duration_since(previous).num_days().abs() == 1
}
