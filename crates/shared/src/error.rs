//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Every domain error in the core and db crates maps onto one of these
/// kinds at the HTTP boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced entity absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or unresolvable input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced role is disabled.
    #[error("Role inactive: {0}")]
    RoleInactive(String),

    /// Referenced category is disabled.
    #[error("Category inactive: {0}")]
    CategoryInactive(String),

    /// Role not entitled to a category package.
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// Operation conflicts with current state (e.g., expense already decided).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Required seed data is missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidArgument(_) => 400,
            Self::RoleInactive(_) | Self::CategoryInactive(_) | Self::PolicyViolation(_) => 422,
            Self::Conflict(_) => 409,
            Self::Config(_) | Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::RoleInactive(_) => "ROLE_INACTIVE",
            Self::CategoryInactive(_) => "CATEGORY_INACTIVE",
            Self::PolicyViolation(_) => "POLICY_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::InvalidArgument(String::new()).status_code(), 400);
        assert_eq!(AppError::RoleInactive(String::new()).status_code(), 422);
        assert_eq!(AppError::CategoryInactive(String::new()).status_code(), 422);
        assert_eq!(AppError::PolicyViolation(String::new()).status_code(), 422);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::Config(String::new()).status_code(), 500);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::InvalidArgument(String::new()).error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            AppError::RoleInactive(String::new()).error_code(),
            "ROLE_INACTIVE"
        );
        assert_eq!(
            AppError::CategoryInactive(String::new()).error_code(),
            "CATEGORY_INACTIVE"
        );
        assert_eq!(
            AppError::PolicyViolation(String::new()).error_code(),
            "POLICY_VIOLATION"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::Database(String::new()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("employee 7".into()).to_string(),
            "Not found: employee 7"
        );
        assert_eq!(
            AppError::PolicyViolation("msg".into()).to_string(),
            "Policy violation: msg"
        );
        assert_eq!(
            AppError::Conflict("msg".into()).to_string(),
            "Conflict: msg"
        );
    }
}
