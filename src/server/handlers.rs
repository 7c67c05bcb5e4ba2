//! HTTP handlers for employee operations
//!
//! Handlers only translate between HTTP and [`EmployeeService`]; business
//! rules live in the service.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, State},
    http::{StatusCode, request::Parts},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::core::error::{ApiError, EmployeeError, RequestError};
use crate::core::{Employee, EmployeeInput, EmployeeService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn EmployeeService>,
}

impl AppState {
    pub fn new(service: Arc<dyn EmployeeService>) -> Self {
        Self { service }
    }
}

/// JSON body extractor whose rejection renders as an [`ApiError`]
///
/// Axum's own `Json` rejection replies with plain text; this keeps every
/// error body in the `{code, message}` shape.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(RequestError::InvalidJson {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}

/// Path extractor whose rejection renders as an [`ApiError`]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(RequestError::InvalidPath {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}

/// Query string extractor whose rejection renders as an [`ApiError`]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => Err(RequestError::InvalidQuery {
                message: rejection.body_text(),
            }
            .into()),
        }
    }
}

/// Query string for the name lookup
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameQuery {
    pub first_name: String,
    pub last_name: String,
}

/// POST /api/employees
///
/// Returns 201 with the stored employee, 400 on a bad payload, 409 when the
/// email is already registered.
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = input.into_new_employee()?;
    let saved = state.service.create_employee(employee).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.service.list_employees().await?))
}

/// GET /api/employees/{id}
///
/// 404 with an empty body when the id is unknown.
pub async fn get_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Result<Json<Employee>, StatusCode>, ApiError> {
    Ok(state
        .service
        .get_employee_by_id(id)
        .await?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND))
}

/// PUT /api/employees/{id}
///
/// Merges the fields present in the body onto the stored record. The path
/// id always wins over any id in the body.
pub async fn update_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> Result<Json<Employee>, ApiError> {
    let mut employee = state
        .service
        .get_employee_by_id(id)
        .await?
        .ok_or(EmployeeError::NotFound { id })?;

    input.merge_into(&mut employee)?;

    Ok(Json(state.service.update_employee(employee).await?))
}

/// DELETE /api/employees/{id}
///
/// Always 204, whether or not the id existed.
pub async fn delete_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/employees/search?firstName=..&lastName=..
pub async fn find_employee_by_name(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NameQuery>,
) -> Result<Result<Json<Employee>, StatusCode>, ApiError> {
    Ok(state
        .service
        .find_employee_by_name(&query.first_name, &query.last_name)
        .await?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND))
}
