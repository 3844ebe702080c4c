use goals_core::Goal;
use serde::{Deserialize, Serialize};

/// GET /goals response
#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

/// POST /goals request
///
/// `text` stays untyped so a missing or non-string value reaches validation
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateGoalRequest {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

impl CreateGoalRequest {
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(|v| v.as_str())
    }
}

/// POST /goals response
#[derive(Debug, Serialize)]
pub struct CreateGoalResponse {
    pub message: &'static str,
    pub goal: Goal,
}

/// Body of DELETE /goals/{id} and of every error response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
