use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use goals_core::GoalId;

use super::dto::*;
use super::error::ApiError;
use super::state::AppState;

/// GET /goals - List every stored goal
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GoalsResponse>, ApiError> {
    let goals = state.service.list().await?;
    Ok(Json(GoalsResponse { goals }))
}

/// POST /goals - Store a new goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateGoalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateGoalResponse>), ApiError> {
    // An unreadable body carries no text, which is an invalid-input case.
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable goal body");
            CreateGoalRequest::default()
        }
    };

    let goal = state.service.create(req.text()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateGoalResponse {
            message: "Goal saved",
            goal,
        }),
    ))
}

/// DELETE /goals/{id} - Delete a goal; unknown ids succeed
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&GoalId::from(id)).await?;
    Ok(Json(MessageResponse {
        message: "Deleted goal!",
    }))
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
