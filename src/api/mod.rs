//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoints for importing rosters, downloading
//! the import template, and preparing, calculating, and editing payroll rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, EditRequest, ImportQuery, PrepareRequest, TemplateQuery};
pub use response::{ApiError, ApiErrorResponse, ImportResponse, PrepareResponse};
pub use state::AppState;
