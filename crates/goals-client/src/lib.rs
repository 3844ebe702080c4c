//! # goals-client
//!
//! A local mirror of the goals list kept in step with the goals API.
//!
//! ## Key components
//!
//! - [`GoalClient`] — load / add / delete with optimistic reconciliation
//! - [`ClientState`] — `Idle | Busy | Loaded | Failed`, plus the [`View`] it renders
//! - [`GoalsBackend`] / [`HttpBackend`] — the API calls, over reqwest
//! - [`ClientError`] — request failures and the banner text they produce

pub mod backend;
pub mod client;
pub mod error;
pub mod state;

pub use backend::{GoalsBackend, HttpBackend};
pub use client::GoalClient;
pub use error::ClientError;
pub use state::{ClientState, Operation, Outcome, View};
