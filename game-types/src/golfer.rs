use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::GolferId;

/// Reference data for one golfer, as published in the golfer catalog.
///
/// The catalog is produced by a scraping pipeline that writes `""` or `null`
/// for unknown values and sometimes encodes numbers as strings, so the
/// attribute fields are parsed leniently into `Option`s. A present `0` or
/// `false` stays present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Golfer {
    #[serde(deserialize_with = "string_or_number")]
    #[ts(type = "string")]
    pub id: GolferId,
    pub player_id: String,
    #[serde(alias = "fullName")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[ts(type = "number | null")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[ts(type = "number | null")]
    pub turned_pro: Option<u32>,
    #[serde(default, deserialize_with = "non_empty_text")]
    #[ts(type = "string | null")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    #[ts(type = "string | null")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    #[ts(type = "string | null")]
    pub education: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub has_videos: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(u64),
    Text(String),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawValue::deserialize(deserializer)? {
        RawValue::Number(n) => Ok(n.to_string()),
        RawValue::Text(s) => Ok(s),
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawValue::Number(n)) => u32::try_from(n)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(RawValue::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawValue::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
