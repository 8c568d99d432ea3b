//! Domain types and pure state logic for the character manager.
//!
//! This crate has no I/O and no internal dependencies so it can be shared
//! by the HTTP client, the view session and the local store server.

pub mod character;
pub mod draft;
pub mod error;
pub mod favorites;
pub mod form;
pub mod types;
pub mod view;
