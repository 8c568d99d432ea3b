//! View-level state and derived data.
//!
//! [`ViewState`] replaces a handful of independent UI flags with one typed
//! container. At most one modal is visible at a time because [`Modal`] is
//! a single tagged value.

use crate::character::Character;
use crate::draft::Draft;
use crate::form::{Form, FormStatus};

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Characters whose name contains `search`, compared case-insensitively.
///
/// An empty search returns every character. Order is preserved.
pub fn filter_characters<'a>(characters: &'a [Character], search: &str) -> Vec<&'a Character> {
    let needle = search.to_lowercase();
    characters
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

// ---------------------------------------------------------------------------
// Modal
// ---------------------------------------------------------------------------

/// The single modal currently shown, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Form(Form),
    Favorites,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    modal: Modal,
    search: String,
    theme: Theme,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Open an empty create form, replacing any open modal.
    pub fn open_create_form(&mut self) {
        self.modal = Modal::Form(Form::create());
    }

    /// Open an edit form for `character`, replacing any open modal.
    pub fn open_edit_form(&mut self, character: &Character) {
        self.modal = Modal::Form(Form::edit(character));
    }

    /// Close the form (if open) and discard its draft.
    pub fn close_form(&mut self) -> Option<Form> {
        match std::mem::take(&mut self.modal) {
            Modal::Form(form) => Some(form),
            other => {
                self.modal = other;
                None
            }
        }
    }

    pub fn open_favorites(&mut self) {
        self.modal = Modal::Favorites;
    }

    pub fn close_favorites(&mut self) {
        if self.modal == Modal::Favorites {
            self.modal = Modal::None;
        }
    }

    pub fn favorites_open(&self) -> bool {
        self.modal == Modal::Favorites
    }

    pub fn form(&self) -> Option<&Form> {
        match &self.modal {
            Modal::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_status(&self) -> FormStatus {
        self.form().map_or(FormStatus::Closed, Form::status)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.form().map(Form::draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.modal {
            Modal::Form(form) => Some(form.draft_mut()),
            _ => None,
        }
    }
}
