//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("{0}")]
    Validation(String),

    /// Request rejected before reaching a handler (bad body, bad query).
    #[error("{message}")]
    Rejected {
        /// HTTP status reported by the extractor.
        status: u16,
        /// Human-readable rejection reason.
        message: String,
    },
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Rejected { status, .. } => *status,
        }
    }

    /// Returns the error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Rejected { .. } => "REQUEST_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Validation(String::new()), 400, "VALIDATION_ERROR")]
    #[case(AppError::Rejected { status: 415, message: String::new() }, 415, "REQUEST_REJECTED")]
    #[case(AppError::Rejected { status: 422, message: String::new() }, 422, "REQUEST_REJECTED")]
    fn test_status_and_code(#[case] error: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("Invalid operation".into()).to_string(),
            "Invalid operation"
        );
        assert_eq!(
            AppError::Rejected {
                status: 400,
                message: "msg".into()
            }
            .to_string(),
            "msg"
        );
    }
}
