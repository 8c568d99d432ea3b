//! Wire models of the store: stored records, request bodies and the seed
//! file layout.

use marvel_core::character::{Character, DEFAULT_RATING, DEFAULT_UNIVERSE};
use marvel_core::error::CoreError;
use marvel_core::types::CharacterId;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// A stored character. Ids go out as strings, the way json-server
/// writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    #[serde(serialize_with = "serialize_id")]
    pub id: CharacterId,
    pub name: String,
    pub real_name: String,
    pub universe: String,
    pub rating: i32,
}

fn serialize_id<S: Serializer>(id: &CharacterId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

impl CharacterRecord {
    /// Build a record from a validated request body, filling defaults.
    pub fn from_input(id: CharacterId, input: &CharacterInput) -> Self {
        let universe = input
            .universe
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_UNIVERSE)
            .to_string();

        Self {
            id,
            name: input.name.clone(),
            real_name: input.real_name.clone(),
            universe,
            rating: input.rating.unwrap_or(DEFAULT_RATING),
        }
    }
}

impl From<Character> for CharacterRecord {
    fn from(character: Character) -> Self {
        let rating = character.effective_rating();
        let universe = if character.universe.trim().is_empty() {
            DEFAULT_UNIVERSE.to_string()
        } else {
            character.universe
        };
        Self {
            id: character.id,
            name: character.name,
            real_name: character.real_name,
            universe,
            rating,
        }
    }
}

/// Body of `POST /characters` and `PUT /characters/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "realName is required"))]
    pub real_name: String,
    #[serde(default)]
    pub universe: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}

impl CharacterInput {
    pub fn validate_input(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))
    }
}

/// json-server `db.json` layout: `{ "characters": [...] }`.
///
/// Entries go through [`Character`] so string and numeric ids are both
/// accepted.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: serde_json::Value) -> CharacterInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn record_serializes_id_as_string() {
        let record = CharacterRecord {
            id: 7,
            name: "Black Widow".into(),
            real_name: "Natasha Romanoff".into(),
            universe: "Earth-616".into(),
            rating: 4,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["realName"], "Natasha Romanoff");
    }

    #[test]
    fn from_input_fills_defaults() {
        let record = CharacterRecord::from_input(
            3,
            &input(serde_json::json!({"name": "Hulk", "realName": "Bruce Banner"})),
        );
        assert_eq!(record.universe, "Earth-616");
        assert_eq!(record.rating, 5);
    }

    #[test]
    fn from_input_replaces_blank_universe() {
        let record = CharacterRecord::from_input(
            3,
            &input(serde_json::json!({"name": "Hulk", "realName": "Bruce Banner", "universe": " "})),
        );
        assert_eq!(record.universe, "Earth-616");
    }

    #[test]
    fn input_requires_name_and_real_name() {
        let err = input(serde_json::json!({"universe": "Earth-616"}))
            .validate_input()
            .unwrap_err()
            .to_string();
        assert!(err.contains("name is required"));
        assert!(err.contains("realName is required"));
    }

    #[test]
    fn input_rejects_out_of_range_rating() {
        let result = input(serde_json::json!({"name": "Hulk", "realName": "Bruce Banner", "rating": 9}))
            .validate_input();
        assert!(result.is_err());
    }

    #[test]
    fn seed_entries_accept_mixed_id_encodings() {
        let seed: SeedFile = serde_json::from_value(serde_json::json!({
            "characters": [
                {"id": "1", "name": "Spider-Man", "realName": "Peter Parker", "universe": "Earth-616", "rating": 5},
                {"id": 2, "name": "Iron Man", "realName": "Tony Stark"}
            ]
        }))
        .unwrap();
        let records: Vec<CharacterRecord> = seed.characters.into_iter().map(Into::into).collect();
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].universe, "Earth-616");
        assert_eq!(records[1].rating, 5);
    }
}
