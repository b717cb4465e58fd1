//! Notes API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! shared router builder and store bootstrap) so integration tests and the
//! binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
