//! In-memory implementation of EmployeeRepository for testing and development

use crate::core::employee::Employee;
use crate::core::error::{StorageError, StorageResult};
use crate::core::repository::EmployeeRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Constraint name reported when two rows would share an email
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "employees_email_key";

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl Table {
    fn email_taken(&self, email: &str, except_id: i64) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != except_id)
    }
}

/// In-memory employee table
///
/// Behaves like the SQL table: ids come from a monotonically increasing
/// sequence starting at 1 and `email` carries a unique index. Uses RwLock
/// for thread-safe access; clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty in-memory table
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> StorageError {
    StorageError::LockPoisoned {
        message: e.to_string(),
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> StorageResult<Employee> {
        let mut table = self.table.write().map_err(poisoned)?;

        if table.email_taken(&employee.email, employee.id) {
            return Err(StorageError::UniqueViolation {
                constraint: EMAIL_UNIQUE_CONSTRAINT.to_string(),
            });
        }

        if employee.is_persisted() {
            if !table.rows.contains_key(&employee.id) {
                return Err(StorageError::RowNotFound { id: employee.id });
            }
        } else {
            table.last_id += 1;
            employee.id = table.last_id;
        }

        tracing::debug!(id = employee.id, "in-memory save");
        table.rows.insert(employee.id, employee.clone());

        Ok(employee)
    }

    async fn find_all(&self) -> StorageResult<Vec<Employee>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Employee>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Employee>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().find(|row| row.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StorageResult<Option<Employee>> {
        let table = self.table.read().map_err(poisoned)?;

        // BTreeMap iterates by ascending id, so the first hit is the lowest id
        Ok(table
            .rows
            .values()
            .find(|row| row.first_name == first_name && row.last_name == last_name)
            .cloned())
    }
}
