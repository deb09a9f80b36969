//! Application layer error types

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors reported by the VulnCheck API or raised before a request is sent
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("No API token configured; set VULNCHECK_API_TOKEN")]
    MissingToken,

    #[error("Authentication failed ({status})")]
    Authentication { status: u16 },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl ApiError {
    /// Map a non-success status and its body to an error
    pub fn from_status(status: u16, resource: &str, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Authentication { status },
            404 => ApiError::NotFound {
                resource: resource.to_string(),
            },
            429 => ApiError::RateLimit,
            503 => ApiError::ServiceUnavailable,
            _ => ApiError::Http {
                status,
                message: error_message_from_body(body),
            },
        }
    }
}

/// VulnCheck error bodies look like `{"error": true, "errors": ["..."]}`;
/// fall back to the raw text for anything else.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            let errors = value.get("errors")?.as_array()?;
            let messages: Vec<&str> = errors.iter().filter_map(|e| e.as_str()).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl ApplicationError {
    /// Short error kind used in structured log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            ApplicationError::Domain(_) => "domain_error",
            ApplicationError::Api(_) => "api_error",
            ApplicationError::Network(_) => "network_error",
            ApplicationError::Json(_) => "json_error",
            ApplicationError::Io(_) => "io_error",
            ApplicationError::Configuration { .. } => "configuration_error",
        }
    }
}
