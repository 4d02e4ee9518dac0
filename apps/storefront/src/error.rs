//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Frontend                    Rust Host                                  │
//! │  ────────                    ─────────                                  │
//! │                                                                         │
//! │  {"cmd":"add_to_cart",...}                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  ipc::invoke                                                     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON / args? ─── serde_json::Error ──────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Unknown product? ─── CoreError::ProductNotFound ─ ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── {"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart transitions themselves never fail; errors only come from the edges.

use serde::Serialize;
use vintage_core::CoreError;

use crate::state::{CatalogLoadError, ConfigError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Request was not valid JSON or had the wrong argument shape
    InvalidArguments,

    /// No command with the requested name
    UnknownCommand,

    /// Configuration or catalog could not be loaded at startup
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArguments, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(cmd: &str) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", cmd))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            // Only catalog construction at startup raises these
            CoreError::DuplicateProduct(id) => ApiError::new(
                ErrorCode::ConfigError,
                format!("Catalog has duplicate product id: {}", id),
            ),
            CoreError::InvalidCatalog(reason) => ApiError::new(
                ErrorCode::ConfigError,
                format!("Product catalog is invalid: {}", reason),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<CatalogLoadError> for ApiError {
    fn from(err: CatalogLoadError) -> Self {
        match err {
            CatalogLoadError::Invalid(e) => ApiError::from(e),
            io @ CatalogLoadError::Io { .. } => {
                ApiError::new(ErrorCode::ConfigError, io.to_string())
            }
        }
    }
}

/// Malformed requests and argument payloads.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_arguments(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use vintage_core::ValidationError;

    #[test]
    fn test_error_serializes_with_screaming_code() {
        let err = ApiError::not_found("Product", "42");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = CoreError::ProductNotFound("9".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "id".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_json_error_is_invalid_arguments() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
        assert_eq!(
            serde_json::to_value(err.code).unwrap(),
            serde_json::json!("INVALID_ARGUMENTS")
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ApiError = ConfigError::InvalidValue("VINTAGE_TAX_ESTIMATE".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.to_string().contains("VINTAGE_TAX_ESTIMATE"));
    }
}
