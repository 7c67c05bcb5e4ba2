//! Service layer enforcing the employee business rules

use crate::core::employee::Employee;
use crate::core::error::{ApiError, ApiResult, EmployeeError, StorageError};
use crate::core::repository::EmployeeRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Service trait consumed by the HTTP handlers
///
/// Absence is reported as `None` rather than an error; the HTTP layer
/// decides how to surface it.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist a new employee, rejecting an email that is already registered
    async fn create_employee(&self, employee: Employee) -> ApiResult<Employee>;

    /// List all employees (empty when none exist)
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;

    /// Get an employee by id
    async fn get_employee_by_id(&self, id: i64) -> ApiResult<Option<Employee>>;

    /// Persist the full record as given
    ///
    /// The caller merges partial changes beforehand; no existence check is
    /// made here.
    async fn update_employee(&self, employee: Employee) -> ApiResult<Employee>;

    /// Delete an employee; unknown ids succeed silently
    async fn delete_employee(&self, id: i64) -> ApiResult<()>;

    /// Exact lookup on first and last name
    async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ApiResult<Option<Employee>>;
}

/// [`EmployeeService`] backed by an [`EmployeeRepository`]
///
/// Creates are serialized through an async mutex so that the email check and
/// the insert cannot interleave within this process. The repository's unique
/// index covers writers in other processes.
pub struct EmployeeManager<R> {
    repository: Arc<R>,
    create_lock: Mutex<()>,
}

impl<R: EmployeeRepository> EmployeeManager<R> {
    /// Wrap an owned repository
    pub fn new(repository: R) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    /// Share a repository that is also used elsewhere
    pub fn from_arc(repository: Arc<R>) -> Self {
        Self {
            repository,
            create_lock: Mutex::new(()),
        }
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

/// Translate storage failures on a write into domain errors
fn write_error(err: StorageError, employee: &Employee) -> ApiError {
    match err {
        StorageError::UniqueViolation { .. } => EmployeeError::DuplicateEmail {
            email: employee.email.clone(),
        }
        .into(),
        StorageError::RowNotFound { id } => EmployeeError::NotFound { id }.into(),
        other => other.into(),
    }
}

#[async_trait]
impl<R: EmployeeRepository + 'static> EmployeeService for EmployeeManager<R> {
    async fn create_employee(&self, employee: Employee) -> ApiResult<Employee> {
        let _guard = self.create_lock.lock().await;

        if self
            .repository
            .find_by_email(&employee.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %employee.email, "rejected duplicate employee email");
            return Err(EmployeeError::DuplicateEmail {
                email: employee.email,
            }
            .into());
        }

        let to_insert = employee.clone().with_id(0);
        let saved = self
            .repository
            .save(to_insert)
            .await
            .map_err(|e| write_error(e, &employee))?;

        tracing::info!(id = saved.id, "employee created");
        Ok(saved)
    }

    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_employee_by_id(&self, id: i64) -> ApiResult<Option<Employee>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn update_employee(&self, employee: Employee) -> ApiResult<Employee> {
        let saved = self
            .repository
            .save(employee.clone())
            .await
            .map_err(|e| write_error(e, &employee))?;

        tracing::info!(id = saved.id, "employee updated");
        Ok(saved)
    }

    async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "employee deleted");
        Ok(())
    }

    async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ApiResult<Option<Employee>> {
        Ok(self.repository.find_by_name(first_name, last_name).await?)
    }
}
