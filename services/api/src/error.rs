use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::Resource;

/// API error variants. Every failure a handler can report goes through here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No data provided")]
    MissingBody,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid user id header")]
    InvalidIdentity,
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("No users in the database")]
    NoUsersExist,
    #[error("{0} is already a favorite")]
    DuplicateFavorite(Resource),
    #[error("{0} is not in favorites")]
    FavoriteNotFound(Resource),
    #[error("{0} already exists")]
    AlreadyExists(&'static str),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingBody => "MISSING_BODY",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidIdentity => "INVALID_IDENTITY",
            Self::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoUsersExist => "NO_USERS_EXIST",
            Self::DuplicateFavorite(_) => "DUPLICATE_FAVORITE",
            Self::FavoriteNotFound(_) => "FAVORITE_NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingBody
            | Self::InvalidBody(_)
            | Self::InvalidIdentity
            | Self::MissingRequiredField(_)
            | Self::DuplicateFavorite(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::NoUsersExist | Self::FavoriteNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors; TraceLayer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        // Duplicates answer with `message`, everything else with `error`.
        let text_key = match &self {
            Self::DuplicateFavorite(_) => "message",
            _ => "error",
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            text_key: self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
