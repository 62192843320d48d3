//! Per-call request descriptor and decoded response.

use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::Value;
use std::borrow::Cow;
use std::time::Duration;

/// Percent-encode one caller-supplied value for use as a single path segment.
///
/// `/`, `?`, `#` and `%` are escaped so the value stays inside its segment.
/// Empty and dot segments are rejected: URL parsing would resolve them and
/// address a different resource.
pub fn path_segment<'a>(field: &str, value: &'a str) -> Result<Cow<'a, str>> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(Error::configuration_with_context(
            format!("invalid {} '{}': not usable as a path segment", field, value),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("request"),
        ));
    }
    Ok(urlencoding::encode(value))
}

/// Everything needed to issue one API call. Built per call, consumed by
/// [`crate::PortainerClient::request`].
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path below the API root, starting with `/` (e.g. `/endpoints/1`).
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Per-call override; `None` uses the client's configured request timeout.
    pub timeout: Option<Duration>,
    /// Return the success body verbatim instead of parsing it as JSON.
    pub raw: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            timeout: None,
            raw: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Whether this request changes remote state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
    }
}

/// Decoded success body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The remote answered with an empty body (e.g. `204 No Content`).
    Empty,
    Json(Value),
    /// Verbatim body of a raw-mode request.
    Text(String),
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty)
    }

    /// Collapse into a JSON value: empty becomes `null`, text becomes a string.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Empty => Value::Null,
            ApiResponse::Json(v) => v,
            ApiResponse::Text(s) => Value::String(s),
        }
    }
}
