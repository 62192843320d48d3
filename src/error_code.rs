//! Stable, machine-readable error codes.
//!
//! Every failure leaving this crate carries one of these codes. The outward
//! tool layer matches on the code string, so the `Display` form is part of the
//! public contract and must not change between releases.
//!
//! | Code                  | Category      | Trigger                                   |
//! |-----------------------|---------------|-------------------------------------------|
//! | `HTTP_<status>`       | remote        | Portainer answered with a non-2xx status  |
//! | `TIMEOUT`             | transport     | Per-call timer fired before the response  |
//! | `CONNECTION_ERROR`    | transport     | DNS, refused, TLS or reset failures       |
//! | `WRITE_DISABLED`      | policy        | Mutating call while writes are disabled   |
//! | `NOT_FOUND`           | lookup        | Name-based lookup found no match          |
//! | `INVALID_RESPONSE`    | remote        | Success body that is not valid JSON       |
//! | `CONFIGURATION_ERROR` | configuration | Invalid client configuration              |
//!
//! ## Example
//!
//! ```rust
//! use portainer_mcp_rust::error_code::ErrorCode;
//!
//! let code = ErrorCode::from_http_status(403);
//! assert_eq!(code.to_string(), "HTTP_403");
//! assert_eq!(code.category(), "remote");
//! ```

use std::fmt;

/// Machine-readable classification attached to every [`crate::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Non-success HTTP status returned by the remote service.
    Http(u16),
    /// The per-call timer fired before the remote responded.
    Timeout,
    /// Network-level failure that is not a timeout.
    ConnectionError,
    /// A mutating operation was attempted while the write gate is closed.
    WriteDisabled,
    /// A name-based lookup found no matching record.
    NotFound,
    /// A success response carried a body that could not be decoded.
    InvalidResponse,
    /// The client could not be constructed from its configuration.
    Configuration,
}

impl ErrorCode {
    /// Maps an HTTP status to its `HTTP_<status>` code.
    #[inline]
    pub fn from_http_status(status: u16) -> Self {
        Self::Http(status)
    }

    /// HTTP status carried by the code, if any.
    ///
    /// `NOT_FOUND` is synthesized locally but still reports 404 so callers can
    /// treat it like a remote miss.
    #[inline]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http(status) => Some(*status),
            Self::NotFound => Some(404),
            _ => None,
        }
    }

    /// Coarse category: `"remote"`, `"transport"`, `"policy"`, `"lookup"` or `"configuration"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Http(_) | Self::InvalidResponse => "remote",
            Self::Timeout | Self::ConnectionError => "transport",
            Self::WriteDisabled => "policy",
            Self::NotFound => "lookup",
            Self::Configuration => "configuration",
        }
    }

    /// Whether a caller could reasonably repeat the same call and expect a
    /// different outcome. The client itself never retries.
    #[inline]
    pub fn transient(&self) -> bool {
        match self {
            Self::Timeout | Self::ConnectionError => true,
            Self::Http(status) => matches!(status, 408 | 429 | 502 | 503 | 504),
            _ => false,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(status) => write!(f, "HTTP_{}", status),
            Self::Timeout => f.write_str("TIMEOUT"),
            Self::ConnectionError => f.write_str("CONNECTION_ERROR"),
            Self::WriteDisabled => f.write_str("WRITE_DISABLED"),
            Self::NotFound => f.write_str("NOT_FOUND"),
            Self::InvalidResponse => f.write_str("INVALID_RESPONSE"),
            Self::Configuration => f.write_str("CONFIGURATION_ERROR"),
        }
    }
}
