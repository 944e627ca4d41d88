use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Remote strategy API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Strategy API unavailable: {message} (retries: {retries})")]
    Unavailable { message: String, retries: u32 },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid base URL: {url}")]
    InvalidUrl { url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input boundary validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} must be {min}-{max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} is required")]
    Required { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Length { field, .. }
            | ValidationError::Required { field } => *field,
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for strategy API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for input validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing url".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing url");

        let err = AppError::from(ValidationError::Required { field: "rationale" });
        assert_eq!(err.to_string(), "Validation error: rationale is required");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Unavailable {
            message: "server down".to_string(),
            retries: 3,
        };
        assert_eq!(
            err.to_string(),
            "Strategy API unavailable: server down (retries: 3)"
        );

        let err = ApiError::Api {
            status: 404,
            message: "session not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - session not found");

        let err = ApiError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = ApiError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");

        let err = ApiError::InvalidUrl {
            url: "not a url".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid base URL: not a url");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::OutOfRange {
            field: "strength_match",
            value: 6,
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "strength_match must be between 1 and 5, got 6");
        assert_eq!(err.field(), "strength_match");

        let err = ValidationError::Length {
            field: "title",
            min: 3,
            max: 200,
            actual: 2,
        };
        assert_eq!(err.to_string(), "title must be 3-200 characters, got 2");

        let err = ValidationError::Required { field: "rationale" };
        assert_eq!(err.to_string(), "rationale is required");
        assert_eq!(err.field(), "rationale");
    }

    #[test]
    fn test_api_error_conversion_to_app_error() {
        let api_err = ApiError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = api_err.into();
        assert!(matches!(app_err, AppError::Api(_)));
    }

    #[test]
    fn test_validation_error_conversion_to_app_error() {
        let err = ValidationError::Required { field: "left_pole" };
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Validation(_)));
        assert!(app_err.to_string().contains("left_pole is required"));
    }
}
