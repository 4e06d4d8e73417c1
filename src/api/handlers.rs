//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    RowCalculation, apply_edit, calculate_with_audit, collect_warnings, project_rows, summarize,
};
use crate::config::Package;
use crate::import::{export_template, incomplete_rows, normalize};
use crate::models::{AuditTrace, PayrollMonth, PayrollRow, PayrollRunResult};

use super::request::{CalculateRequest, EditRequest, ImportQuery, PrepareRequest, TemplateQuery};
use super::response::{ApiError, ApiErrorResponse, ImportResponse, PrepareResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/import", post(import_handler))
        .route("/employees/template", get(template_handler))
        .route("/payroll/prepare", post(prepare_handler))
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/edit", post(edit_handler))
        .with_state(state)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Invalid query string"
    );
    error_response(ApiErrorResponse::new(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(rejection.body_text()),
    ))
}

/// Handler for POST /employees/import.
///
/// The body is the raw uploaded file; `kind` says how to read it.
async fn import_handler(
    query: Result<Query<ImportQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        kind = ?query.kind,
        bytes = body.len(),
        "Processing roster import"
    );

    let start_time = Instant::now();
    match normalize(&body, query.kind, query.work_type) {
        Ok(outcome) => {
            let incomplete = incomplete_rows(&outcome.employees);
            info!(
                correlation_id = %correlation_id,
                employees = outcome.employees.len(),
                skipped = outcome.skipped_count,
                incomplete = incomplete.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Roster import completed"
            );
            json_response(ImportResponse {
                import_id: Uuid::new_v4(),
                employees: outcome.employees,
                skipped_count: outcome.skipped_count,
                incomplete,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster import failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /employees/template.
async fn template_handler(query: Result<Query<TemplateQuery>, QueryRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    match export_template(query.work_type) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                work_type = query.work_type.as_str(),
                "Serving roster template"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!(
                            "attachment; filename=\"employees_template_{}.csv\"",
                            query.work_type.as_str()
                        ),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Template export failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll/prepare.
///
/// Projects employees into calculated rows, seeding matched debts.
async fn prepare_handler(
    State(state): State<AppState>,
    payload: Result<Json<PrepareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let package = match config.get_package(&request.package_id) {
        Ok(package) => package,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                package_id = %request.package_id,
                "Package not found"
            );
            return error_response(err.into());
        }
    };

    let mut rows = project_rows(
        request.employees,
        &request.debts,
        &package.plan,
        request.tier_system_active,
    );
    let payment_method = &config.company().default_payment_method;
    for row in rows.iter_mut() {
        row.payment_method = payment_method.clone();
    }
    let totals = summarize(&rows, package.plan.work_type);

    info!(
        correlation_id = %correlation_id,
        package_id = %package.id,
        rows = rows.len(),
        employees_with_debts = totals.employees_with_debts,
        "Prepared payroll rows"
    );

    json_response(PrepareResponse {
        package_id: package.id.clone(),
        work_type: package.plan.work_type,
        rows,
        totals,
    })
}

/// Handler for POST /payroll/calculate.
///
/// Recomputes every row and returns the run with totals and audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let month = match PayrollMonth::parse(&request.month) {
        Ok(month) => month,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid payroll month");
            return error_response(err.into());
        }
    };

    let package = match state.config().get_package(&request.package_id) {
        Ok(package) => package,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                package_id = %request.package_id,
                "Package not found"
            );
            return error_response(err.into());
        }
    };

    let result = perform_payroll_run(package, month, request.tier_system_active, &request.rows);
    info!(
        correlation_id = %correlation_id,
        package_id = %result.package_id,
        month = %result.month,
        rows = result.rows.len(),
        total_salary = %result.totals.total_salary,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Payroll calculation completed"
    );
    json_response(result)
}

/// Handler for POST /payroll/edit.
///
/// Applies one field edit and returns the row, recomputed when the edit
/// touched a pay input.
async fn edit_handler(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let package = match state.config().get_package(&request.package_id) {
        Ok(package) => package,
        Err(err) => return error_response(err.into()),
    };

    let recomputed = request.edit.affects_pay();
    let mut row = request.row;
    apply_edit(&mut row, request.edit, &package.plan, request.tier_system_active);
    info!(
        correlation_id = %correlation_id,
        package_id = %package.id,
        recomputed,
        "Applied row edit"
    );
    json_response(row)
}

/// Recomputes a batch of rows under a package and assembles the run result.
fn perform_payroll_run(
    package: &Package,
    month: PayrollMonth,
    tier_system_active: bool,
    rows: &[PayrollRow],
) -> PayrollRunResult {
    let start_time = Instant::now();
    let plan = &package.plan;

    let mut steps = Vec::with_capacity(rows.len());
    let mut calculated = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let RowCalculation {
            row,
            mut audit_step,
        } = calculate_with_audit(
            row,
            plan,
            tier_system_active,
            u32::try_from(index + 1).unwrap_or(u32::MAX),
        );
        if let Some(input) = audit_step.input.as_object_mut() {
            input.insert(
                "employee".to_string(),
                serde_json::Value::String(row.employee.name.clone()),
            );
        }
        steps.push(audit_step);
        calculated.push(row);
    }

    let totals = summarize(&calculated, plan.work_type);
    let warnings = collect_warnings(&calculated, plan.work_type);
    let duration_us = start_time.elapsed().as_micros() as u64;

    PayrollRunResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        package_id: package.id.clone(),
        work_type: plan.work_type,
        month,
        tier_system_active,
        rows: calculated,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
