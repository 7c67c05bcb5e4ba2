//! The employee record and the request payload used to create or amend it

use crate::core::error::{FieldError, ValidationError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted (or about to be persisted) employee.
///
/// `id` is assigned by the store on insert; `0` means the record has not
/// been saved yet. Field names are camelCase on the wire and snake_case in
/// the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Create an unsaved employee (id `0`)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Same record carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Whether this record targets an existing row
    ///
    /// Only `0` means unsaved; any other id, negative included, names a row
    /// that saving must update.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// JSON body accepted by `POST` and `PUT /api/employees`.
///
/// Every field is optional at the serde level so that the same payload can
/// drive a full create and a partial merge. `id` is accepted and ignored:
/// identity always comes from the store or the request path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

impl EmployeeInput {
    /// Build a new, unsaved employee. All three fields are required.
    pub fn into_new_employee(self) -> Result<Employee, ValidationError> {
        self.validate()?;

        let missing: Vec<FieldError> = [
            ("firstName", self.first_name.is_none()),
            ("lastName", self.last_name.is_none()),
            ("email", self.email.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(field, _)| FieldError::new(field, "required", "field is required"))
        .collect();

        match (self.first_name, self.last_name, self.email) {
            (Some(first_name), Some(last_name), Some(email)) => {
                Ok(Employee::new(first_name, last_name, email))
            }
            _ => Err(ValidationError::FieldErrors(missing)),
        }
    }

    /// Overwrite the fields present in this payload onto `employee`.
    ///
    /// The stored id is never touched.
    pub fn merge_into(self, employee: &mut Employee) -> Result<(), ValidationError> {
        self.validate()?;

        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }

        Ok(())
    }
}
