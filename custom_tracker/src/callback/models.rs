//! Callback payloads Riot posts for tracked games.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::riot::Platform;

/// Callback validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallbackError {
    /// eventType, tournamentCode or platformId absent or empty
    #[error("Missing required fields")]
    MissingRequiredFields,
}

/// Raw callback body.
///
/// Decoding never fails on field shape: a value of the wrong type reads as
/// absent. Missing required fields are reported by
/// [`TournamentCallback::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentCallback {
    #[serde(deserialize_with = "lenient_string")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub tournament_code: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub game_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub platform_id: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub participants: Option<Vec<Participant>>,
    #[serde(deserialize_with = "lenient_object")]
    pub game_data: Option<GameData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    #[serde(deserialize_with = "lenient_string")]
    pub summoner_id: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub team_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub spell1_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub spell2_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub champion_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub profile_icon_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub summoner_name: Option<String>,
}

/// Game result summary attached to completion events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    #[serde(deserialize_with = "lenient_i64")]
    pub game_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub game_creation: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub game_duration: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub queue_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub map_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub season_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub game_version: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub game_mode: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub game_type: Option<String>,
}

// Strings and numbers read as text; anything else is absent
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

// Integers, floats (truncated) and numeric strings; anything else is absent
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

// Non-object entries are dropped
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Event type tag. The set is open: unrecognised tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    GameCreated,
    GameCompleted,
    TournamentStarted,
    TournamentCompleted,
    Unknown(String),
}

impl EventKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "gameCreated" => EventKind::GameCreated,
            "gameCompleted" => EventKind::GameCompleted,
            "tournamentStarted" => EventKind::TournamentStarted,
            "tournamentCompleted" => EventKind::TournamentCompleted,
            other => EventKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::GameCreated => "gameCreated",
            EventKind::GameCompleted => "gameCompleted",
            EventKind::TournamentStarted => "tournamentStarted",
            EventKind::TournamentCompleted => "tournamentCompleted",
            EventKind::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCallback {
    pub kind: EventKind,
    pub tournament_code: String,
    pub platform_id: String,
    pub game_id: Option<i64>,
    pub timestamp: Option<i64>,
    pub participants: Vec<Participant>,
    pub game_data: Option<GameData>,
}

impl ValidCallback {
    /// Known platform, `None` for ids outside the platform table
    pub fn platform(&self) -> Option<Platform> {
        Platform::parse(&self.platform_id)
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl TournamentCallback {
    pub fn validate(self) -> Result<ValidCallback, CallbackError> {
        let (Some(event_type), Some(tournament_code), Some(platform_id)) = (
            present(self.event_type),
            present(self.tournament_code),
            present(self.platform_id),
        ) else {
            return Err(CallbackError::MissingRequiredFields);
        };

        Ok(ValidCallback {
            kind: EventKind::parse(&event_type),
            tournament_code,
            platform_id,
            game_id: self.game_id,
            timestamp: self.timestamp,
            participants: self.participants.unwrap_or_default(),
            game_data: self.game_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> TournamentCallback {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_full_game_created_event() {
        let callback = parse(json!({
            "eventType": "gameCreated",
            "tournamentCode": "NA-CODE-1",
            "gameId": 1234567890,
            "platformId": "NA1",
            "timestamp": 1700000000000i64,
            "participants": [{
                "summonerId": "s-1",
                "teamId": 100,
                "spell1Id": 4,
                "spell2Id": 7,
                "championId": 157,
                "profileIconId": 1,
                "summonerName": "SamplePlayer1"
            }]
        }));

        let valid = callback.validate().unwrap();
        assert_eq!(valid.kind, EventKind::GameCreated);
        assert_eq!(valid.game_id, Some(1234567890));
        assert_eq!(valid.participants.len(), 1);
        assert_eq!(valid.participants[0].champion_id, Some(157));
        assert_eq!(valid.platform(), Some(Platform::NA1));
    }

    #[test]
    fn test_game_data_partial_fields_default() {
        let callback = parse(json!({
            "eventType": "gameCompleted",
            "tournamentCode": "C",
            "platformId": "EUW1",
            "gameData": {"gameId": 9, "gameDuration": 1800}
        }));
        let data = callback.validate().unwrap().game_data.unwrap();
        assert_eq!(data.game_duration, Some(1800));
        assert_eq!(data.game_mode, None);
    }

    #[test]
    fn test_validate_requires_three_fields() {
        let complete = json!({"eventType": "gameCreated", "tournamentCode": "C", "platformId": "NA1"});
        for field in ["eventType", "tournamentCode", "platformId"] {
            let mut value = complete.clone();
            value.as_object_mut().unwrap().remove(field);
            assert_eq!(
                parse(value).validate().unwrap_err(),
                CallbackError::MissingRequiredFields
            );

            let mut value = complete.clone();
            value[field] = json!("");
            assert_eq!(
                parse(value).validate().unwrap_err(),
                CallbackError::MissingRequiredFields
            );
        }
    }

    #[test]
    fn test_unknown_event_kept_verbatim() {
        let valid = parse(json!({"eventType": "lobbyClosed", "tournamentCode": "C", "platformId": "XX9"}))
            .validate()
            .unwrap();
        assert_eq!(valid.kind, EventKind::Unknown("lobbyClosed".to_string()));
        assert!(!valid.kind.is_known());
        assert_eq!(valid.kind.as_str(), "lobbyClosed");
        assert_eq!(valid.platform(), None);
    }

    #[test]
    fn test_event_kind_round_trip_names() {
        for tag in ["gameCreated", "gameCompleted", "tournamentStarted", "tournamentCompleted"] {
            let kind = EventKind::parse(tag);
            assert!(kind.is_known());
            assert_eq!(kind.to_string(), tag);
        }
    }

    #[test]
    fn test_optional_fields_of_the_wrong_shape_read_as_absent() {
        let valid = parse(json!({
            "eventType": "gameCompleted",
            "tournamentCode": "C",
            "platformId": "NA1",
            "gameId": "123",
            "timestamp": 1700000000000.5,
            "participants": [{"teamId": null, "championId": "157"}, 7],
            "gameData": {"gameVersion": null, "gameDuration": [1]}
        }))
        .validate()
        .unwrap();

        assert_eq!(valid.game_id, Some(123));
        assert_eq!(valid.timestamp, Some(1700000000000));
        assert_eq!(valid.participants.len(), 1);
        assert_eq!(valid.participants[0].team_id, None);
        assert_eq!(valid.participants[0].champion_id, Some(157));
        assert_eq!(valid.game_data, Some(GameData::default()));
    }

    #[test]
    fn test_non_container_nested_values_are_dropped() {
        let valid = parse(json!({
            "eventType": "gameCreated",
            "tournamentCode": "C",
            "platformId": "NA1",
            "gameId": {"nested": true},
            "participants": "none",
            "gameData": 42
        }))
        .validate()
        .unwrap();

        assert_eq!(valid.game_id, None);
        assert!(valid.participants.is_empty());
        assert_eq!(valid.game_data, None);
    }

    #[test]
    fn test_required_field_of_the_wrong_shape_is_missing() {
        let callback = parse(json!({"eventType": null, "tournamentCode": "C", "platformId": "NA1"}));
        assert_eq!(callback.validate().unwrap_err(), CallbackError::MissingRequiredFields);
    }
}
