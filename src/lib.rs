//! # Employees
//!
//! A small CRUD REST backend for employee records.
//!
//! ## Layers
//!
//! - **Model**: [`Employee`](core::Employee) and the request payload
//!   [`EmployeeInput`](core::EmployeeInput)
//! - **Repository**: [`EmployeeRepository`](core::EmployeeRepository), with an
//!   in-memory table and a PostgreSQL backend (`postgres` feature)
//! - **Service**: [`EmployeeService`](core::EmployeeService), which rejects
//!   duplicate emails
//! - **HTTP**: axum handlers under `/api/employees`, assembled by
//!   [`ServerBuilder`](server::ServerBuilder)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use employees::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryEmployeeRepository::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, Employee, EmployeeError, EmployeeInput, EmployeeManager,
        EmployeeRepository, EmployeeService, StorageError, StorageResult, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryEmployeeRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresEmployeeRepository;

    // === Config ===
    pub use crate::config::{AppConfig, Backend};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
