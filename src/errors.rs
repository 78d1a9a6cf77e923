use thiserror::Error;

use crate::models::Field;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure of a record store operation. The message is shown to the user as is.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Employee ID '{0}' already exists. Use a unique ID.")]
    DuplicateId(String),

    #[error("Employee '{0}' not found.")]
    EmployeeNotFound(String),

    #[error("Unsupported currency symbol '{0}'.")]
    UnsupportedCurrency(String),

    #[error("Invalid salary amount '{0}'.")]
    InvalidAmount(String),

    #[error("Could not save employee data: {0:#}")]
    Persistence(anyhow::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    EmptyId,

    #[error("{0} is required.")]
    Empty(Field),

    #[error("{0} must contain only letters.")]
    NotAlphabetic(Field),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let err: StoreError = ValidationError::NotAlphabetic(Field::Position).into();
        assert_eq!(err.to_string(), "Job Title must contain only letters.");
    }

    #[test]
    fn persistence_message_includes_cause_chain() {
        let cause = anyhow::anyhow!("disk full").context("writing employee_data.json");
        let err = StoreError::Persistence(cause);
        assert_eq!(
            err.to_string(),
            "Could not save employee data: writing employee_data.json: disk full"
        );
    }
}
