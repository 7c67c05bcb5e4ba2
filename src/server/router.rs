//! Router builder for the employee REST API

use crate::server::handlers::{
    AppState, create_employee, delete_employee, find_employee_by_name, get_employee,
    list_employees, update_employee,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the employee routes
///
/// - GET    /api/employees               - List employees
/// - POST   /api/employees               - Create an employee
/// - GET    /api/employees/search        - Exact lookup by first and last name
/// - GET    /api/employees/{id}          - Get an employee
/// - PUT    /api/employees/{id}          - Merge fields onto an employee
/// - DELETE /api/employees/{id}          - Delete an employee
pub fn build_employee_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(list_employees).post(create_employee),
        )
        .route("/api/employees/search", get(find_employee_by_name))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// Assemble the full application router with request tracing
pub fn build_app(state: AppState, custom_routes: Vec<Router>) -> Router {
    let mut app = health_routes().merge(build_employee_routes(state));

    for custom_router in custom_routes {
        app = app.merge(custom_router);
    }

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
