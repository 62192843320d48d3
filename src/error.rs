use crate::error_code::ErrorCode;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the raw response body)
    pub details: Option<String>,
    /// Source of the error (e.g., "request", "fetch_logs", "lookup")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Classified error for every failure path of the Portainer client.
///
/// Each variant maps to exactly one stable [`ErrorCode`]; use [`Error::code`]
/// for machine matching and the `Display` output for humans.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("Request timed out after {timeout_ms}ms: {method} {path}")]
    Timeout {
        method: String,
        path: String,
        timeout_ms: u64,
    },

    #[error("Failed to connect to Portainer at {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Write operations are disabled; set PORTAINER_WRITE_ENABLED=true to allow '{operation}'")]
    WriteDisabled { operation: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: String, name: String },

    #[error("Invalid response from {path}: {message}{}", format_context(.context))]
    InvalidResponse {
        path: String,
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Http { status, .. } => ErrorCode::Http(*status),
            Error::Timeout { .. } => ErrorCode::Timeout,
            Error::Connection { .. } => ErrorCode::ConnectionError,
            Error::WriteDisabled { .. } => ErrorCode::WriteDisabled,
            Error::NotFound { .. } => ErrorCode::NotFound,
            Error::InvalidResponse { .. } => ErrorCode::InvalidResponse,
            Error::Configuration { .. } => ErrorCode::Configuration,
        }
    }

    /// HTTP status associated with the error (remote status, or 404 for lookups).
    pub fn http_status(&self) -> Option<u16> {
        self.code().http_status()
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn write_disabled(operation: impl Into<String>) -> Self {
        Error::WriteDisabled {
            operation: operation.into(),
        }
    }

    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Http { context, .. }
            | Error::InvalidResponse { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
