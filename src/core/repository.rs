//! Data-access trait for employee rows

use crate::core::employee::Employee;
use crate::core::error::StorageResult;
use async_trait::async_trait;

/// Storage contract for the `employees` table
///
/// Implementations are agnostic to the HTTP layer. Every backend must keep
/// `email` unique and report a collision as
/// [`StorageError::UniqueViolation`](crate::core::error::StorageError::UniqueViolation).
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `employee.id == 0`, otherwise replace every column of the
    /// row with that id
    ///
    /// Returns the stored record, with the generated id on insert. Saving a
    /// non-zero id that has no row fails with `StorageError::RowNotFound`.
    async fn save(&self, employee: Employee) -> StorageResult<Employee>;

    /// All rows, ascending by id
    async fn find_all(&self) -> StorageResult<Vec<Employee>>;

    /// Get a row by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Employee>>;

    /// Delete a row; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;

    /// Exact-match lookup on email
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Employee>>;

    /// Exact match on both names
    ///
    /// When several rows match, the one with the lowest id wins.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StorageResult<Option<Employee>>;
}
