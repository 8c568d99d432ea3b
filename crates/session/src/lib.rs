//! Client-side synchronization between the character form, the in-memory
//! character list and the remote store.
//!
//! [`Session`] owns one view session: the [`CharacterCache`], the
//! favorites, the typed view state and the cancellation token shared by
//! every request it issues.

pub mod cache;
pub mod config;
pub mod error;
pub mod notify;
pub mod session;

pub use cache::CharacterCache;
pub use config::SessionConfig;
pub use error::SessionError;
pub use notify::{AutoConfirm, Confirm, Notifier, TracingNotifier};
pub use session::{DeleteOutcome, Session, SubmitOutcome};
