//! Library entrypoint for the portfolio tracker backend.
//!
//! The binary in `main.rs` only wires configuration, the database pool and
//! the quote provider together; everything else lives here so integration
//! tests under `tests/` can build the real router and services against
//! in-memory state.

pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
