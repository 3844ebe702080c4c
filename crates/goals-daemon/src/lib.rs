//! # goals-daemon
//!
//! HTTP API for the goals list.
//!
//! | Method | Path          | Success                                  |
//! |--------|---------------|------------------------------------------|
//! | GET    | `/goals`      | 200 `{goals: [{id, text}]}`              |
//! | POST   | `/goals`      | 201 `{message, goal: {id, text}}`        |
//! | DELETE | `/goals/{id}` | 200 `{message}`                          |
//! | GET    | `/health`     | 200 `{status, version}`                  |
//!
//! Failures answer with `{message}`: 422 for blank goal text, 500 for any
//! store failure.

pub mod api;
pub mod config;
pub mod logging;
pub mod server;

pub use config::DaemonConfig;
pub use server::{run, serve, ServeArgs};
