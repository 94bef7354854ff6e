//! Required-field checks for submitted employee records.

use super::types::Employee;
use thiserror::Error;

/// The first required field found missing on a record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Employee ID cannot be 0")]
    MissingId,

    #[error("Employee Name cannot be blank")]
    MissingName,

    #[error("Employee Position cannot be blank")]
    MissingPosition,

    #[error("Employee Salary cannot be 0")]
    MissingSalary,
}

/// Check a record field by field: id, name, position, salary.
///
/// Stops at the first failure.
pub fn validate_employee(employee: &Employee) -> Result<(), ValidationError> {
    if employee.id == 0 {
        return Err(ValidationError::MissingId);
    }
    if employee.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if employee.position.is_empty() {
        return Err(ValidationError::MissingPosition);
    }
    if employee.salary == 0.0 {
        return Err(ValidationError::MissingSalary);
    }
    Ok(())
}
