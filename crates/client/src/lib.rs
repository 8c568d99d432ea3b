//! Client for the remote character store.
//!
//! [`CharacterStore`] is the seam the view session talks to;
//! [`HttpCharacterStore`] implements it over the store's REST endpoints
//! using [`reqwest`].

pub mod api;
pub mod config;
pub mod store;

pub use api::{HttpCharacterStore, StoreError};
pub use config::ClientConfig;
pub use store::CharacterStore;
