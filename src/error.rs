//! Error taxonomy shared by the store operations and the HTTP layer.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// A field value rejected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("400: Validation error: {field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named entity ("Camper", "Activity", ...) does not exist.
    #[error("404: {0} not found")]
    NotFound(&'static str),

    /// The database refused the write (foreign key, NOT NULL, unique, check).
    #[error("{0}")]
    Constraint(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::CheckViolation => {
                    return StoreError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_status_prefix() {
        let err = StoreError::from(ValidationError::new("age", "must be between 8 and 18"));
        assert_eq!(
            err.to_string(),
            "400: Validation error: age must be between 8 and 18"
        );
        assert_eq!(
            StoreError::NotFound("Camper").to_string(),
            "404: Camper not found"
        );
    }

    #[test]
    fn non_database_sqlx_errors_stay_generic() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }
}
