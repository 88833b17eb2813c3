//! Typed error handling for the roster
//!
//! Every failure is a returned value; nothing here is fatal to the process.
//!
//! # Error Categories
//!
//! - [`RosterError::InvalidArgument`]: malformed id, negative paging, bad enum or timestamp
//! - [`RosterError::Validation`]: a create candidate or update payload broke a field rule
//! - [`RosterError::NotFound`]: the addressed player does not exist
//! - [`RosterError::Storage`]: the backing store failed
//!
//! # Example
//!
//! ```rust,ignore
//! match service.update(id, payload).await {
//!     Ok(player) => println!("updated {}", player.id),
//!     Err(RosterError::NotFound { id }) => println!("no player {}", id),
//!     Err(RosterError::Validation(e)) => println!("rejected: {}", e),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::player::PlayerId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Result alias used by the core and the service layer
pub type RosterResult<T> = Result<T, RosterError>;

/// The main error type of the roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Caller supplied a value the boundary cannot accept
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Field-level rule violation on create or update
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No player with this id
    #[error("Player with id '{id}' not found")]
    NotFound { id: PlayerId },

    /// Backing store failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RosterError {
    /// Shorthand for [`RosterError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RosterError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            RosterError::Validation(_) => StatusCode::BAD_REQUEST,
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RosterError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            RosterError::Validation(_) => "VALIDATION_FAILED",
            RosterError::NotFound { .. } => "PLAYER_NOT_FOUND",
            RosterError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            RosterError::NotFound { id } => Some(serde_json::json!({ "id": id })),
            RosterError::Validation(e) => Some(serde_json::json!({
                "operation": e.operation,
                "fields": e.violations,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// The write operation a validation failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOperation {
    Create,
    Update,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOperation::Create => f.write_str("create"),
            WriteOperation::Update => f.write_str("update"),
        }
    }
}

/// One broken field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A rejected create or update, with every violated rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed for {operation}: {}", summarize(.violations))]
pub struct ValidationError {
    pub operation: WriteOperation,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Names of the offending fields, in rule order
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    /// Whether a specific field was rejected
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a [`crate::core::store::PlayerStore`] implementation
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A lock guarding the store was poisoned by a panicking writer
    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),

    /// Overwrite targeted a record that no longer exists
    #[error("Record '{0}' vanished before it could be saved")]
    Missing(PlayerId),

    /// Backend-specific failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error() -> ValidationError {
        ValidationError {
            operation: WriteOperation::Update,
            violations: vec![
                FieldViolation::new("name", "'name' must be at most 12 characters"),
                FieldViolation::new("experience", "'experience' must be at most 10000000"),
            ],
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RosterError::invalid_argument("bad id").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RosterError::from(validation_error()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RosterError::NotFound { id: 3 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RosterError::from(StorageError::Backend("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_lists_every_violation() {
        let message = RosterError::from(validation_error()).to_string();

        assert!(message.starts_with("Validation failed for update"));
        assert!(message.contains("'name'"));
        assert!(message.contains("'experience'"));
    }

    #[test]
    fn test_validation_details_carry_operation_and_fields() {
        let response = RosterError::from(validation_error()).to_response();
        let details = response.details.unwrap();

        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(details["operation"], "update");
        assert_eq!(details["fields"][0]["field"], "name");
        assert_eq!(details["fields"][1]["field"], "experience");
    }

    #[test]
    fn test_not_found_details_carry_id() {
        let response = RosterError::NotFound { id: 42 }.to_response();

        assert_eq!(response.code, "PLAYER_NOT_FOUND");
        assert_eq!(response.details.unwrap()["id"], 42);
    }

    #[test]
    fn test_invalid_argument_has_no_details() {
        let response = RosterError::invalid_argument("pageSize must not be negative").to_response();

        assert_eq!(response.code, "INVALID_ARGUMENT");
        assert!(response.details.is_none());
        assert!(response.message.contains("pageSize"));
    }

    #[test]
    fn test_validation_error_field_helpers() {
        let err = validation_error();

        assert_eq!(err.fields(), vec!["name", "experience"]);
        assert!(err.has_field("experience"));
        assert!(!err.has_field("title"));
    }
}
