//! Response types for the Payroll Engine API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::import::IncompleteRow;
use crate::models::{EmployeeRecord, PayrollRow, PayrollTotals, WorkType};

/// Response body for `POST /employees/import`.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    /// Identifier of this import, for correlating follow-up saves.
    pub import_id: Uuid,
    /// The normalized employees, in file order.
    pub employees: Vec<EmployeeRecord>,
    /// Blank or nameless data rows that were dropped.
    pub skipped_count: usize,
    /// Employees missing required fields.
    pub incomplete: Vec<IncompleteRow>,
}

/// Response body for `POST /payroll/prepare`.
#[derive(Debug, Clone, Serialize)]
pub struct PrepareResponse {
    /// The package the rows were projected under.
    pub package_id: String,
    /// The package's work type.
    pub work_type: WorkType,
    /// Calculated rows, one per employee.
    pub rows: Vec<PayrollRow>,
    /// Totals over the (all selected) rows.
    pub totals: PayrollTotals,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a package not found error response.
    pub fn package_not_found(id: &str) -> Self {
        Self::with_details(
            "PACKAGE_NOT_FOUND",
            format!("Package not found: {}", id),
            format!("No compensation package with id '{}' is configured", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::PackageNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::package_not_found(&id),
            },
            EngineError::Parse { message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "PARSE_ERROR",
                    "The uploaded file could not be read",
                    message,
                ),
            },
            EngineError::Export { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Template export failed", message),
            },
            EngineError::InvalidPayrollMonth { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid payroll month: {}", value),
                    "The month must be written as YYYY-MM",
                ),
            },
        }
    }
}
