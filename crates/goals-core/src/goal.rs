// goal.rs — Goal: the single entity of the goals list.
//
// A Goal is a store-assigned id plus one line of user text. There is no
// update path: a goal is created once, listed any number of times, and
// deleted by id.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GoalError;

/// Opaque goal identifier assigned by the store.
///
/// Callers never parse or construct meaning from an id; any string is a valid
/// delete key, so ids that no store ever produced are simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Mint a fresh id. Stores call this once per inserted document.
    pub fn generate() -> Self {
        GoalId(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GoalId {
    fn from(id: String) -> Self {
        GoalId(id)
    }
}

impl From<&str> for GoalId {
    fn from(id: &str) -> Self {
        GoalId(id.to_string())
    }
}

/// A goal as exposed over the API: `{id, text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
}

impl Goal {
    pub fn new(id: impl Into<GoalId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The persisted shape of a goal: `{_id, text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDocument {
    #[serde(rename = "_id")]
    pub id: GoalId,
    pub text: String,
}

impl From<GoalDocument> for Goal {
    fn from(doc: GoalDocument) -> Self {
        Goal {
            id: doc.id,
            text: doc.text,
        }
    }
}

impl From<Goal> for GoalDocument {
    fn from(goal: Goal) -> Self {
        GoalDocument {
            id: goal.id,
            text: goal.text,
        }
    }
}

/// Check submitted goal text.
///
/// Only the check trims: the returned slice is the text exactly as submitted,
/// surrounding whitespace included.
pub fn validate_text(text: Option<&str>) -> Result<&str, GoalError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(GoalError::InvalidInput),
    }
}
