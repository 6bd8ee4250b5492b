use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::ChampionshipError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<ChampionshipError> for ApiError {
    fn from(error: ChampionshipError) -> Self {
        use ChampionshipError::*;

        let message = error.to_string();
        match error {
            InvalidTeam(_) | InvalidMatch(_) | GroupFull(_) | UnknownTeam(_)
            | CrossGroupMatch { .. } | TeamHasMatches { .. } => {
                tracing::debug!(%message, "Request rejected");
                Self::bad_request(message)
            }
            TeamNotFound(_) | MatchNotFound(_) => Self::not_found(message),
            DuplicateTeam(_) | DuplicateMatch { .. } => Self::conflict(message),
            Ranking(_) | Repository(_) => {
                tracing::error!(%message, "Request failed");
                Self::internal_server_error(message)
            }
        }
    }
}
