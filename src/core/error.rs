//! Typed error handling for the employees backend
//!
//! Every failure a request can hit is a variant of [`ApiError`], grouped by
//! category so callers can match on what went wrong instead of inspecting
//! strings.
//!
//! # Error Categories
//!
//! - [`EmployeeError`]: domain failures (duplicate email, unknown id)
//! - [`ValidationError`]: payload fields that failed validation
//! - [`RequestError`]: requests that could not be parsed at all
//! - [`StorageError`]: failures reported by a repository backend
//!
//! # Example
//!
//! ```rust,ignore
//! match service.create_employee(employee).await {
//!     Ok(saved) => println!("saved {}", saved.id),
//!     Err(ApiError::Employee(EmployeeError::DuplicateEmail { email })) => {
//!         println!("{} is already registered", email);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Result alias used by the service layer
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result alias used by repositories
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum ApiError {
    /// Employee domain errors
    #[error(transparent)]
    Employee(#[from] EmployeeError),

    /// Payload validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed requests
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),
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

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Employee(e) => e.status_code(),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Employee(e) => e.error_code(),
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(_) => "STORAGE_ERROR",
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
            ApiError::Employee(EmployeeError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            ApiError::Employee(EmployeeError::DuplicateEmail { email }) => {
                Some(serde_json::json!({ "email": email }))
            }
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Employee Errors
// =============================================================================

/// Domain errors raised by the employee service
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// No employee has this id
    #[error("employee with id '{id}' not found")]
    NotFound { id: i64 },

    /// Another employee already uses this email
    #[error("employee already exists with given email: {email}")]
    DuplicateEmail { email: String },
}

impl EmployeeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EmployeeError::NotFound { .. } => StatusCode::NOT_FOUND,
            EmployeeError::DuplicateEmail { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EmployeeError::NotFound { .. } => "EMPLOYEE_NOT_FOUND",
            EmployeeError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to payload validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("validation failed: {}", summarize(.0))]
    FieldErrors(Vec<FieldError>),
}

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the JSON body
    pub field: String,
    /// Machine-readable rule name (`required`, `length`, `email`)
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// validator reports Rust field names; the API speaks camelCase
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = wire_field_name(&field);
                errs.iter()
                    .map(|e| {
                        let message = e
                            .message
                            .clone()
                            .unwrap_or_else(|| Cow::Owned(format!("failed '{}' check", e.code)));
                        FieldError::new(field.clone(), e.code.to_string(), message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // HashMap iteration order is not stable
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        ValidationError::FieldErrors(fields)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body is not valid JSON or does not match the expected shape
    #[error("invalid JSON body: {message}")]
    InvalidJson { message: String },

    /// A path segment could not be parsed (e.g. a non-numeric id)
    #[error("invalid path parameter: {message}")]
    InvalidPath { message: String },

    /// The query string is missing a parameter or could not be parsed
    #[error("invalid query string: {message}")]
    InvalidQuery { message: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidJson { .. } => "INVALID_JSON",
            RequestError::InvalidPath { .. } => "INVALID_PATH",
            RequestError::InvalidQuery { .. } => "INVALID_QUERY",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors reported by repository backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Query or connection failure inside a backend
    #[error("{backend} query error: {message}")]
    QueryError { backend: String, message: String },

    /// A unique index rejected the write
    #[error("unique constraint '{constraint}' violated")]
    UniqueViolation { constraint: String },

    /// An update targeted an id with no row
    #[error("no row with id '{id}'")]
    RowNotFound { id: i64 },

    /// A lock guarding in-process state was poisoned
    #[error("storage lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl StorageError {
    pub fn query(backend: impl Into<String>, message: impl ToString) -> Self {
        StorageError::QueryError {
            backend: backend.into(),
            message: message.to_string(),
        }
    }
}
