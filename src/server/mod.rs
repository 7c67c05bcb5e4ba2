//! Server module for building the employee HTTP server
//!
//! This module provides:
//! - Employee CRUD handlers under `/api/employees`
//! - Health check routes
//! - A `ServerBuilder` that wires a repository or service into a router

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{build_app, build_employee_routes};
