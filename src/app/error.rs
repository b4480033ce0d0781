use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;

use crate::app::{
    db::project_members::AddMemberError, permissions::PermissionError, response::ApiResponse,
};

/// Message returned when the permission service denies an action.
pub const FORBIDDEN_MESSAGE: &str = "User doesn't have enough permission to perform this action";

/// Application error type for unified error handling across the app.
///
/// Every failure in a request pipeline ends up here and is rendered as an
/// [`ApiResponse`]. Infrastructure failures carry the raw underlying error
/// text to the client.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (400).
    Validation(String),

    /// No authenticated principal in the request context (401).
    Unauthorized,

    /// Permission service denied the action (403).
    Forbidden,

    /// Business rule rejection, e.g. duplicate membership or project not found (400).
    BusinessRule(String),

    /// Unknown route target (404).
    NotFound(String),

    /// Store failure (500).
    Database(SqlxError),

    /// Permission service failure (500).
    Permission(PermissionError),

    /// Other unexpected failure (500).
    Internal(String),
}

impl AppError {
    /// Status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE.to_string()),
            AppError::BusinessRule(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::Permission(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }

    /// Render into the transport shape, logging server-side failures.
    pub fn into_api_response<T>(self) -> ApiResponse<T> {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        }
        ApiResponse::error(status, message)
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<PermissionError> for AppError {
    fn from(err: PermissionError) -> Self {
        AppError::Permission(err)
    }
}

impl From<AddMemberError> for AppError {
    fn from(err: AddMemberError) -> Self {
        match err {
            AddMemberError::Database(e) => AppError::Database(e),
            AddMemberError::Serialize(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_api_response::<()>().into_response()
    }
}
