//! Local character store server.
//!
//! A json-server compatible REST store for the character manager: ids are
//! serialized as strings, new ids are allocated as `max + 1`. Used for
//! local development and by the client's end-to-end tests.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;
pub mod state;
