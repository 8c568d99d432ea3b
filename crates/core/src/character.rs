//! The persisted character entity and its wire normalization.
//!
//! Stores in the wild disagree on how ids are encoded (json-server emits
//! strings, most others emit numbers), so [`Character`] accepts both and
//! always exposes an integer [`CharacterId`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CharacterId;

/// Universe applied when a draft leaves the field blank.
pub const DEFAULT_UNIVERSE: &str = "Earth-616";

/// Rating shown and edited when a record carries none.
pub const DEFAULT_RATING: i32 = 5;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// A character as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: CharacterId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub universe: String,
    /// `None` when the store omitted the field.
    #[serde(default)]
    pub rating: Option<i32>,
}

impl Character {
    /// Rating to display or edit. Missing and zero ratings fall back to
    /// [`DEFAULT_RATING`].
    pub fn effective_rating(&self) -> i32 {
        self.rating
            .filter(|rating| *rating != 0)
            .unwrap_or(DEFAULT_RATING)
    }
}

/// Parse a textual id the way the store may send it (`"7"`, `" 7 "`).
pub fn parse_id(raw: &str) -> Option<CharacterId> {
    raw.trim().parse::<CharacterId>().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<CharacterId, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok(f as CharacterId)
        }
        RawId::Float(f) => Err(serde::de::Error::custom(format!(
            "character id {f} is not an integer"
        ))),
        RawId::Text(s) => parse_id(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("character id '{s}' is not numeric"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: serde_json::Value) -> Result<Character, serde_json::Error> {
        serde_json::from_value(json)
    }

    #[test]
    fn numeric_string_id_is_normalized() {
        let c = decode(serde_json::json!({
            "id": "7",
            "name": "Black Widow",
            "realName": "Natasha Romanoff",
            "universe": "Earth-616",
            "rating": 4
        }))
        .unwrap();
        assert_eq!(c.id, 7);
        assert_eq!(c.real_name, "Natasha Romanoff");
    }

    #[test]
    fn numeric_id_is_kept() {
        let c = decode(serde_json::json!({"id": 3, "name": "Hulk"})).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn whole_float_id_is_accepted() {
        let c = decode(serde_json::json!({"id": 12.0, "name": "Vision"})).unwrap();
        assert_eq!(c.id, 12);
    }

    #[test]
    fn padded_string_id_is_trimmed() {
        let c = decode(serde_json::json!({"id": " 42 ", "name": "Loki"})).unwrap();
        assert_eq!(c.id, 42);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = decode(serde_json::json!({"id": "abc", "name": "Nobody"})).unwrap_err();
        assert!(err.to_string().contains("not numeric"));
    }

    #[test]
    fn fractional_id_is_rejected() {
        assert!(decode(serde_json::json!({"id": 1.5, "name": "Half"})).is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let c = decode(serde_json::json!({"id": 2, "name": "Thor", "universe": "Earth-616"}))
            .unwrap();
        assert_eq!(c.real_name, "");
        assert_eq!(c.rating, None);
        assert_eq!(c.effective_rating(), DEFAULT_RATING);
    }

    #[test]
    fn zero_rating_falls_back_to_default() {
        let c = decode(serde_json::json!({"id": 2, "name": "Thor", "rating": 0})).unwrap();
        assert_eq!(c.effective_rating(), 5);
    }

    #[test]
    fn explicit_rating_is_kept() {
        let c = decode(serde_json::json!({"id": 2, "name": "Thor", "rating": 3})).unwrap();
        assert_eq!(c.effective_rating(), 3);
    }

    #[test]
    fn serializes_camel_case_with_integer_id() {
        let c = Character {
            id: 1,
            name: "Iron Man".into(),
            real_name: "Tony Stark".into(),
            universe: "Earth-616".into(),
            rating: Some(5),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["realName"], "Tony Stark");
        assert!(json.get("real_name").is_none());
    }
}
