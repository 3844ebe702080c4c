use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goals_core::GoalError;

use super::dto::MessageResponse;

/// API-layer error type. Each variant has one fixed client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// 422 - goal text missing or blank
    InvalidInput,

    /// 500 - listing failed in the store
    LoadFailed,

    /// 500 - saving failed in the store
    SaveFailed,

    /// 500 - deleting failed in the store
    DeleteFailed,

    /// 500 - anything else
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::InvalidInput => "Invalid goal text.",
            ApiError::LoadFailed => "Failed to load goals.",
            ApiError::SaveFailed => "Failed to save goal.",
            ApiError::DeleteFailed => "Failed to delete goal.",
            ApiError::Internal => "Internal server error.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// Store details were logged by the service; only the category crosses the wire.
impl From<GoalError> for ApiError {
    fn from(err: GoalError) -> Self {
        match err {
            GoalError::InvalidInput => ApiError::InvalidInput,
            GoalError::StoreUnavailable { operation, .. } => match operation {
                "list" => ApiError::LoadFailed,
                "create" => ApiError::SaveFailed,
                "delete" => ApiError::DeleteFailed,
                _ => ApiError::Internal,
            },
            _ => ApiError::Internal,
        }
    }
}
