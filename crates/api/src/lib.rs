//! jsonwire API server library.
//!
//! Exposes the JSON transport helper together with the building blocks
//! (config, state, error handling, routes) so integration tests and the
//! binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod json;
pub mod routes;
pub mod state;
