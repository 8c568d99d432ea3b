//! The form's working copy of a character.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::character::{Character, DEFAULT_RATING, DEFAULT_UNIVERSE};
use crate::error::CoreError;

/// Editable character fields, serialized as the POST/PUT request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "realName is required"))]
    pub real_name: String,
    pub universe: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            real_name: String::new(),
            universe: DEFAULT_UNIVERSE.to_string(),
            rating: DEFAULT_RATING,
        }
    }
}

impl Draft {
    /// Populate a draft from a cached character for editing.
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            real_name: character.real_name.clone(),
            universe: character.universe.clone(),
            rating: character.effective_rating(),
        }
    }

    /// Copy of this draft with a blank universe replaced by
    /// [`DEFAULT_UNIVERSE`].
    pub fn normalized(&self) -> Self {
        let mut draft = self.clone();
        if draft.universe.trim().is_empty() {
            draft.universe = DEFAULT_UNIVERSE.to_string();
        }
        draft
    }

    /// Required-field and rating checks run before anything is sent.
    pub fn validate_for_submit(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))
    }

    /// Whether the draft carries the same displayed fields as `character`.
    pub fn matches(&self, character: &Character) -> bool {
        self.name == character.name
            && self.real_name == character.real_name
            && self.universe == character.universe
            && self.rating == character.effective_rating()
    }
}
