use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, info};

use super::{Result, WebError, state::AppState};
use crate::core::{Employee, validate_employee};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw `page`/`size` query values.
///
/// Kept as strings so that garbage falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default)]
pub struct ListEmployeesParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListEmployeesParams {
    /// Pick `page` and `size` out of decoded query pairs. The first
    /// occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        };

        Self {
            page: first("page"),
            size: first("size"),
        }
    }

    /// Requested page, 1-based. Unparsable or non-positive values mean page 1.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Page size. Unparsable or values below 1 mean [`DEFAULT_PAGE_SIZE`].
    pub fn size(&self) -> i64 {
        self.size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|size| *size >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.size())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
}

fn invalid_body(rejection: JsonRejection) -> WebError {
    debug!(error = %rejection.body_text(), "rejected request body");
    WebError::Input(format!(
        "Request body is invalid. Error: {}",
        rejection.body_text()
    ))
}

fn invalid_id(rejection: PathRejection) -> WebError {
    WebError::Input(format!(
        "Error parsing the ID, make sure it is an integer. Error: {}",
        rejection.body_text()
    ))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Employee>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(employee) = payload.map_err(invalid_body)?;
    validate_employee(&employee)?;

    state
        .repo
        .insert(&employee)
        .await
        .map_err(|err| WebError::storage("inserting employee", err))?;

    info!(id = employee.id, "employee created");
    Ok(StatusCode::CREATED)
}

pub async fn get_employee(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Employee>> {
    let Path(id) = id.map_err(invalid_id)?;

    let employee = state
        .repo
        .get(id)
        .await
        .map_err(|err| WebError::storage("getting employee", err))?;

    Ok(Json(employee))
}

pub async fn update_employee(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Employee>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(employee) = payload.map_err(invalid_body)?;
    validate_employee(&employee)?;

    state
        .repo
        .update(&employee)
        .await
        .map_err(|err| WebError::storage("updating employee", err))?;

    info!(id = employee.id, "employee updated");
    Ok(StatusCode::OK)
}

pub async fn delete_employee(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id.map_err(invalid_id)?;

    state
        .repo
        .delete(id)
        .await
        .map_err(|err| WebError::storage("deleting employee", err))?;

    info!(id, "employee deleted");
    Ok(StatusCode::OK)
}

pub async fn list_employees(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Employee>>> {
    let params = query
        .map(|Query(pairs)| ListEmployeesParams::from_pairs(&pairs))
        .unwrap_or_default();
    let (size, offset) = (params.size(), params.offset());

    let employees = state
        .repo
        .list(size, offset)
        .await
        .map_err(|err| WebError::storage("listing employees", err))?;

    debug!(size, offset, returned = employees.len(), "employees listed");
    Ok(Json(employees))
}

/// Liveness check.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        db: None,
    })
}

/// Readiness check that round-trips to the store.
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.repo.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "ok".to_string(),
            db: Some("ready".to_string()),
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "not_ready".to_string(),
                    db: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}
