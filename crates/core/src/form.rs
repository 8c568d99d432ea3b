//! Create/edit form state.
//!
//! An open [`Form`] always carries a draft and a [`FormMode`]; a closed
//! form is represented by the absence of one (see
//! [`Modal`](crate::view::Modal)).

use std::str::FromStr;

use crate::character::Character;
use crate::draft::Draft;
use crate::error::CoreError;
use crate::types::CharacterId;

/// Whether submitting the form creates a new character or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CharacterId),
}

/// Observable state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Closed,
    CreateOpen,
    EditOpen(CharacterId),
}

/// An open form: its mode plus the user's working draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    mode: FormMode,
    draft: Draft,
}

impl Form {
    /// A create form with a fresh default draft.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: Draft::default(),
        }
    }

    /// An edit form populated from `character`.
    pub fn edit(character: &Character) -> Self {
        Self {
            mode: FormMode::Edit(character.id),
            draft: Draft::from_character(character),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> FormStatus {
        match self.mode {
            FormMode::Create => FormStatus::CreateOpen,
            FormMode::Edit(id) => FormStatus::EditOpen(id),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }
}

/// What happens to an open form when a submit fails.
///
/// A successful submit always closes the form and resets the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Leave the form open with the user's input intact.
    #[default]
    KeepOpenOnFailure,
    /// Close and reset the form whatever the outcome.
    CloseAlways,
}

impl SubmitPolicy {
    /// Whether the form should close after a submit with the given outcome.
    pub fn closes_form(self, succeeded: bool) -> bool {
        succeeded || self == SubmitPolicy::CloseAlways
    }
}

impl FromStr for SubmitPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep_open_on_failure" => Ok(SubmitPolicy::KeepOpenOnFailure),
            "close_always" => Ok(SubmitPolicy::CloseAlways),
            other => Err(CoreError::Validation(format!(
                "Invalid submit policy '{other}'. Must be one of: keep_open_on_failure, close_always"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_starts_from_defaults() {
        let form = Form::create();
        assert_eq!(form.status(), FormStatus::CreateOpen);
        assert_eq!(form.draft(), &Draft::default());
    }

    #[test]
    fn edit_form_is_populated_from_character() {
        let thor = Character {
            id: 2,
            name: "Thor".into(),
            real_name: String::new(),
            universe: "Earth-616".into(),
            rating: None,
        };
        let form = Form::edit(&thor);
        assert_eq!(form.status(), FormStatus::EditOpen(2));
        assert_eq!(form.mode(), FormMode::Edit(2));
        assert_eq!(form.draft().name, "Thor");
        assert_eq!(form.draft().universe, "Earth-616");
        assert_eq!(form.draft().rating, 5);
    }

    #[test]
    fn draft_mut_edits_in_place() {
        let mut form = Form::create();
        form.draft_mut().name = "Daredevil".into();
        assert_eq!(form.draft().name, "Daredevil");
    }

    #[test]
    fn keep_open_policy_closes_only_on_success() {
        let policy = SubmitPolicy::KeepOpenOnFailure;
        assert!(policy.closes_form(true));
        assert!(!policy.closes_form(false));
    }

    #[test]
    fn close_always_policy_closes_on_failure() {
        let policy = SubmitPolicy::CloseAlways;
        assert!(policy.closes_form(true));
        assert!(policy.closes_form(false));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!(
            "close_always".parse::<SubmitPolicy>().unwrap(),
            SubmitPolicy::CloseAlways
        );
        assert_eq!(
            " Keep_Open_On_Failure ".parse::<SubmitPolicy>().unwrap(),
            SubmitPolicy::KeepOpenOnFailure
        );
        assert!("sometimes".parse::<SubmitPolicy>().is_err());
    }
}
