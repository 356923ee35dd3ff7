//! Quill API server library.
//!
//! Exposes the building blocks (config, state, error handling, responder,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod authz;
pub mod binding;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod responder;
pub mod router;
pub mod routes;
pub mod state;
