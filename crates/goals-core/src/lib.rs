//! # goals-core
//!
//! The goal model, the document stores that persist it, and the service
//! that lists, creates and deletes goals.
//!
//! ## Key components
//!
//! - [`Goal`] — `{id, text}`; ids are opaque and store-assigned
//! - [`GoalStore`] — trait for a collection of `{_id, text}` documents
//! - [`StoreHandle`] — the explicitly opened/closed store of a process
//! - [`MemoryStore`] / [`DocumentStore`] — in-process and JSON file backends
//! - [`GoalService`] — validation, logging and error mapping over a store
//! - [`GoalEvent`] / [`EventDispatcher`] — lifecycle notifications

pub mod document_store;
pub mod error;
pub mod events;
pub mod goal;
pub mod service;
pub mod store;

pub use document_store::DocumentStore;
pub use error::GoalError;
pub use events::{EventDispatcher, GoalEvent, LogSink, NotificationSink};
pub use goal::{validate_text, Goal, GoalDocument, GoalId};
pub use service::GoalService;
pub use store::{GoalStore, MemoryStore, StoreHandle, StoreUri};
