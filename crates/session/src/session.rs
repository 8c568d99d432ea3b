//! The view session: the single owner of cache, favorites and view state.
//!
//! Every store call runs under a child of the session's
//! [`CancellationToken`]. Once the session is torn down, in-flight calls
//! resolve to [`SessionError::Cancelled`] and their results are dropped
//! without touching local state.
//!
//! Sync policy: every successful mutation ends with a full reload so the
//! cache matches the store. Delete additionally prunes the cache and the
//! favorites before that reload.

use std::future::Future;
use std::sync::Arc;

use marvel_client::{CharacterStore, StoreError};
use marvel_core::character::Character;
use marvel_core::draft::Draft;
use marvel_core::error::CoreError;
use marvel_core::favorites::Favorites;
use marvel_core::form::{FormMode, FormStatus};
use marvel_core::types::CharacterId;
use marvel_core::view::{filter_characters, Theme, ViewState};
use tokio_util::sync::CancellationToken;

use crate::cache::CharacterCache;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::notify::{AutoConfirm, Confirm, Notifier, TracingNotifier};

/// Prompt shown before a delete is sent.
pub const DELETE_PROMPT: &str = "Delete this character?";

const LOAD_FAILED: &str = "Failed to load characters";
const SAVE_FAILED: &str = "Failed to save character";
const DELETE_FAILED: &str = "Failed to delete character";

/// Result of a successful [`Session::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Record returned by the store for the create or update.
    pub saved: Character,
    /// Whether the follow-up reload succeeded.
    pub reloaded: bool,
}

/// Result of [`Session::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The store deleted the character.
    Deleted {
        /// Whether the follow-up reload succeeded.
        reloaded: bool,
    },
}

/// Owner of one view session: the character cache, favorites and view
/// state, kept in sync with a [`CharacterStore`].
pub struct Session<S> {
    store: S,
    config: SessionConfig,
    cache: CharacterCache,
    favorites: Favorites,
    view: ViewState,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    cancel: CancellationToken,
    loading: bool,
}

impl<S: CharacterStore> Session<S> {
    /// Create a session with log-only notifications and deletes refused
    /// until [`with_confirm`](Self::with_confirm) installs a real source.
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            cache: CharacterCache::new(),
            favorites: Favorites::new(),
            view: ViewState::new(),
            notifier: Arc::new(TracingNotifier),
            confirm: Arc::new(AutoConfirm(false)),
            cancel: CancellationToken::new(),
            loading: false,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_confirm(mut self, confirm: Arc<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    // ---- accessors ----

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn characters(&self) -> &[Character] {
        self.cache.as_slice()
    }

    pub fn cache(&self) -> &CharacterCache {
        &self.cache
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// `true` only while a reload is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cached characters matching the current search term.
    pub fn filtered(&self) -> Vec<&Character> {
        filter_characters(self.cache.as_slice(), self.view.search())
    }

    // ---- lifecycle ----

    /// Initial load issued when the view session starts.
    pub async fn mount(&mut self) -> Result<usize, SessionError> {
        tracing::debug!("Mounting character session");
        self.reload().await
    }

    /// Handle that aborts every in-flight and future request of this
    /// session when cancelled. Usable from another task.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Tear the session down; pending requests resolve to
    /// [`SessionError::Cancelled`].
    pub fn teardown(&self) {
        tracing::debug!("Tearing down character session");
        self.cancel.cancel();
    }

    // ---- store synchronization ----

    /// Replace the cache with the store's current collection.
    ///
    /// On failure the cache keeps its previous contents and the user is
    /// notified. Returns the number of characters loaded.
    pub async fn reload(&mut self) -> Result<usize, SessionError> {
        let result = {
            let _loading = LoadingGuard::set(&mut self.loading);
            Self::guarded(&self.cancel, self.store.list()).await
        };

        match result {
            Ok(characters) => {
                let count = characters.len();
                self.cache.replace(characters);
                tracing::info!(count, "Reloaded characters");
                Ok(count)
            }
            Err(err) => Err(self.fail(LOAD_FAILED, err)),
        }
    }

    /// Send the open form to the store: create in create mode, update in
    /// edit mode.
    ///
    /// Validation runs first and never reaches the store. On success the
    /// form closes, the draft resets and the cache is reloaded. On store
    /// failure the user is notified and the form follows the configured
    /// [`SubmitPolicy`](marvel_core::form::SubmitPolicy).
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let form = self.view.form().cloned().ok_or(SessionError::FormClosed)?;
        form.draft().validate_for_submit()?;
        let draft = form.draft().normalized();

        let result = match form.mode() {
            FormMode::Create => Self::guarded(&self.cancel, self.store.create(&draft)).await,
            FormMode::Edit(id) => Self::guarded(&self.cancel, self.store.update(id, &draft)).await,
        };

        match result {
            Ok(saved) => {
                self.view.close_form();
                tracing::info!(id = saved.id, mode = ?form.mode(), "Saved character");
                let reloaded = self.reload().await.is_ok();
                Ok(SubmitOutcome { saved, reloaded })
            }
            Err(err) => {
                let err = self.fail(SAVE_FAILED, err);
                if !matches!(err, SessionError::Cancelled)
                    && self.config.submit_policy.closes_form(false)
                {
                    self.view.close_form();
                }
                Err(err)
            }
        }
    }

    /// Delete character `id` after the user confirms.
    ///
    /// On success the character leaves the cache and the favorites
    /// immediately, then the cache is reloaded. On failure nothing local
    /// changes.
    pub async fn delete(&mut self, id: CharacterId) -> Result<DeleteOutcome, SessionError> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match Self::guarded(&self.cancel, self.store.delete(id)).await {
            Ok(()) => {
                self.cache.remove(id);
                self.favorites.remove(id);
                tracing::info!(id, "Pruned deleted character");
                let reloaded = self.reload().await.is_ok();
                Ok(DeleteOutcome::Deleted { reloaded })
            }
            Err(err) => Err(self.fail(DELETE_FAILED, err)),
        }
    }

    // ---- form ----

    /// Open an empty create form.
    pub fn open_create_form(&mut self) {
        self.view.open_create_form();
    }

    /// Open the form in edit mode, populated from the cached character.
    pub fn open_edit_form(&mut self, id: CharacterId) -> Result<(), SessionError> {
        let character = self.cache.get(id).ok_or(CoreError::NotFound {
            entity: "Character",
            id,
        })?;
        self.view.open_edit_form(character);
        Ok(())
    }

    /// Close the form and discard the draft.
    pub fn cancel_form(&mut self) {
        self.view.close_form();
    }

    pub fn form_status(&self) -> FormStatus {
        self.view.form_status()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.view.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.view.draft_mut()
    }

    // ---- favorites ----

    /// Snapshot the cached character `id` into the favorites.
    ///
    /// Returns `false` when it was already a favorite.
    pub fn add_favorite(&mut self, id: CharacterId) -> Result<bool, SessionError> {
        let character = self.cache.get(id).ok_or(CoreError::NotFound {
            entity: "Character",
            id,
        })?;
        Ok(self.favorites.add(character))
    }

    pub fn remove_favorite(&mut self, id: CharacterId) -> Option<Character> {
        self.favorites.remove(id)
    }

    pub fn open_favorites(&mut self) {
        self.view.open_favorites();
    }

    pub fn close_favorites(&mut self) {
        self.view.close_favorites();
    }

    // ---- view ----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.view.toggle_theme()
    }

    // ---- private helpers ----

    /// Run a store call under a child of the session token.
    async fn guarded<T, F>(cancel: &CancellationToken, request: F) -> Result<T, SessionError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let token = cancel.child_token();
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(SessionError::Cancelled),
            result = request => result.map_err(SessionError::from),
        }
    }

    /// Report a failed store call to the user. Cancellations are silent.
    fn fail(&self, context: &str, err: SessionError) -> SessionError {
        if matches!(err, SessionError::Cancelled) {
            tracing::debug!(context, "Request cancelled");
        } else {
            tracing::warn!(error = %err, "{context}");
            self.notifier.notify(&format!("{context}: {err}"));
        }
        err
    }
}

/// Holds the loading flag up for as long as it lives, so a dropped reload
/// future cannot leave it set.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
