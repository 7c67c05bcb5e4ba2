//! Core module containing the employee model, error types and service traits

pub mod employee;
pub mod error;
pub mod repository;
pub mod service;

pub use employee::{Employee, EmployeeInput};
pub use error::{
    ApiError, ApiResult, EmployeeError, ErrorResponse, FieldError, RequestError, StorageError,
    StorageResult, ValidationError,
};
pub use repository::EmployeeRepository;
pub use service::{EmployeeManager, EmployeeService};
