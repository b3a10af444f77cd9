use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// One human-readable message per colliding field of each existing record.
    #[error("Conflict: {}", .0.join("; "))]
    ConflictError(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_rendering_joins_every_message() {
        let err = ApiError::ConflictError(vec![
            "The phone number in the Primary field is already in use!!".to_string(),
            "The email address is already in use!!".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Conflict: The phone number in the Primary field is already in use!!; \
             The email address is already in use!!"
        );
    }

    #[test]
    fn database_errors_carry_only_the_generic_message() {
        let err = ApiError::DatabaseError("internal storage failure".to_string());
        assert_eq!(err.to_string(), "Database error: internal storage failure");
    }
}
