//! Employee API Handlers
//!
//! Response conventions follow the legacy surface this service replaces:
//! reads answer with JSON bodies, writes answer with plain-text
//! confirmations, and each endpoint keeps its own error-to-status
//! mapping.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};

use shared::models::{Employee, EmployeePatch};

use crate::core::AppState;
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::{AppError, AppResult};

fn parse_emp_no(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("invalid employee id: {raw}")))
}

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "list employees failed");
        AppError::database(e.to_string())
    })?;
    tracing::info!(count = employees.len(), "listed employees");
    Ok(Json(employees))
}

/// Get employee by business id
///
/// Every store-layer failure surfaces as 404 here; the legacy handler
/// folded lookup errors and missing records into the same response.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let emp_no = parse_emp_no(&id)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.find_by_emp_no(emp_no).await.map_err(|e| {
        match &e {
            RepoError::NotFound(_) => tracing::warn!(emp_no, "employee not found"),
            other => tracing::error!(emp_no, error = %other, "get employee failed"),
        }
        AppError::not_found(format!("employee {emp_no} not found"))
    })?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> AppResult<&'static str> {
    let Json(employee) =
        payload.map_err(|e| AppError::validation(format!("invalid request body: {e}")))?;
    let emp_no = employee.id;

    let repo = EmployeeRepository::new(state.db.clone());
    repo.create(employee).await.map_err(|e| match e {
        RepoError::Duplicate(msg) => {
            tracing::warn!(emp_no, "employee id already taken");
            AppError::duplicate(msg)
        }
        other => {
            tracing::error!(emp_no, error = %other, "create employee failed");
            AppError::database(other.to_string())
        }
    })?;

    tracing::info!(emp_no, "employee created");
    Ok("Employee added successfully")
}

/// Partially update an employee
///
/// An id that matches nothing still answers with the confirmation; the
/// merge is simply skipped.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeePatch>, JsonRejection>,
) -> AppResult<&'static str> {
    let emp_no = parse_emp_no(&id)?;
    let Json(patch) =
        payload.map_err(|e| AppError::validation(format!("invalid request body: {e}")))?;

    let repo = EmployeeRepository::new(state.db.clone());
    repo.update(emp_no, patch).await.map_err(|e| {
        tracing::error!(emp_no, error = %e, "update employee failed");
        AppError::database(e.to_string())
    })?;

    tracing::info!(emp_no, "employee update applied");
    Ok("Employee updated successfully")
}

/// Delete every employee document with the given business id
///
/// The legacy surface answers a missing id with 500, not 404, so every
/// store-layer failure maps to a database error here.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<&'static str> {
    let emp_no = parse_emp_no(&id)?;
    let repo = EmployeeRepository::new(state.db.clone());
    let removed = repo.delete(emp_no).await.map_err(|e| {
        match &e {
            RepoError::NotFound(_) => tracing::warn!(emp_no, "delete target not found"),
            other => tracing::error!(emp_no, error = %other, "delete employee failed"),
        }
        AppError::database(e.to_string())
    })?;

    tracing::info!(emp_no, removed, "employee documents deleted");
    Ok("Employee deleted successfully")
}

/// Multi-field employee search
///
/// Repeated query keys keep their first value, matching the legacy
/// handler which read one value per parameter.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Employee>>> {
    let mut filters: Vec<(String, String)> = Vec::new();
    for (key, value) in params {
        if !filters.iter().any(|(k, _)| *k == key) {
            filters.push((key, value));
        }
    }

    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo
        .search(&filters, state.config.search_mode)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "employee search failed");
            AppError::database(e.to_string())
        })?;

    tracing::info!(
        filters = filters.len(),
        count = employees.len(),
        "employee search complete"
    );
    Ok(Json(employees))
}
