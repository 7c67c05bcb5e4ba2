//! Shared test harness for repository backend testing
//!
//! Provides employee fixtures and the `repository_contract_tests!` macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//! use repository_harness::*;
//!
//! repository_contract_tests!(InMemoryEmployeeRepository::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod contract_tests;

use employees::core::Employee;

/// The employee used throughout the suite: Ram Kumar
pub fn ram() -> Employee {
    Employee::new("Ram", "Kumar", "ram@gmail.com")
}

/// Unsaved employees with distinct emails
pub fn sample_batch(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            Employee::new(
                format!("First{}", i),
                format!("Last{}", i),
                format!("employee{}@example.com", i),
            )
        })
        .collect()
}
