use crate::client::error_classification::classify_http_error;
use crate::client::lookup::find_by_name;
use crate::client::request::{path_segment, ApiResponse, RequestDescriptor};
use crate::config::ClientConfig;
use crate::logs;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Fixed API root below the configured base address.
pub const API_ROOT: &str = "/api";

/// Header carrying the Portainer access token.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Portainer API client.
///
/// A plain value: configuration is read-only after construction, so one client
/// can serve any number of concurrent calls. Each call is independent; there is
/// no retry, caching or request coordination.
pub struct PortainerClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl PortainerClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("portainer-mcp-rust/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("client"),
                )
            })?;

        Ok(Self { config, http })
    }

    /// Create a client from `PORTAINER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn write_enabled(&self) -> bool {
        self.config.write_enabled
    }

    /// Write gate. Must run before any mutating request is built.
    pub fn ensure_write_enabled(&self, operation: &str) -> Result<()> {
        if self.config.write_enabled {
            return Ok(());
        }
        info!(operation, "write operation rejected: writes are disabled");
        Err(Error::write_disabled(operation))
    }

    /// Full request URL: normalized base + API root + path + query.
    pub fn endpoint_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let raw = format!("{}{}{}", self.config.base_url(), API_ROOT, path);
        let mut url = Url::parse(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot build request URL '{}': {}", raw, e),
                ErrorContext::new().with_field_path("path").with_source("request"),
            )
        })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Issue one API call and decode the success body.
    ///
    /// Non-success statuses, timeouts and network failures all come back as a
    /// classified [`Error`]; a success body that is not JSON (outside raw mode)
    /// is `INVALID_RESPONSE`. Mutating methods pass the write gate first.
    pub async fn request(&self, req: RequestDescriptor) -> Result<ApiResponse> {
        if req.is_mutating() {
            self.ensure_write_enabled(&format!("{} {}", req.method, req.path))?;
        }

        let (status, body) = self.exchange(&req).await?;
        let text = String::from_utf8_lossy(&body);

        if !status.is_success() {
            return Err(classify_http_error(status.as_u16(), &req.path, &text));
        }
        if text.is_empty() {
            return Ok(ApiResponse::Empty);
        }
        if req.raw {
            return Ok(ApiResponse::Text(text.into_owned()));
        }

        serde_json::from_str(&text)
            .map(ApiResponse::Json)
            .map_err(|e| Error::InvalidResponse {
                path: req.path.clone(),
                message: e.to_string(),
                context: ErrorContext::new().with_source("request"),
            })
    }

    /// GET a path and return its JSON value (`null` for an empty body).
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(RequestDescriptor::get(path))
            .await
            .map(ApiResponse::into_value)
    }

    /// Fetch a container's combined stdout+stderr log transcript.
    ///
    /// `tail` is clamped to `[1, 10000]`. The body is read as bytes and run
    /// through the log demultiplexer.
    pub async fn fetch_logs(
        &self,
        environment_id: u64,
        container_id: &str,
        tail: i64,
    ) -> Result<String> {
        let tail = logs::clamp_tail(tail);
        let container = path_segment("container_id", container_id)?;
        let req = RequestDescriptor::get(format!(
            "/endpoints/{}/docker/containers/{}/logs",
            environment_id, container
        ))
        .with_query("stdout", 1)
        .with_query("stderr", 1)
        .with_query("follow", 0)
        .with_query("tail", tail)
        .with_timeout(self.config.log_timeout);

        let (status, body) = self.exchange(&req).await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(classify_http_error(status.as_u16(), &req.path, &text));
        }

        let transcript = logs::demux(&body);
        debug!(
            bytes = body.len(),
            chars = transcript.len(),
            tty = logs::is_tty_stream(&body),
            "decoded container logs"
        );
        Ok(transcript)
    }

    /// Fetch a collection and return the record whose `field` equals `name`.
    pub async fn lookup_by_name(
        &self,
        path: &str,
        field: &str,
        name: &str,
        kind: &str,
    ) -> Result<Value> {
        match self.get(path).await? {
            Value::Array(items) => find_by_name(items, field, name, kind),
            other => Err(Error::InvalidResponse {
                path: path.to_string(),
                message: format!("expected a JSON array, got {}", json_kind(&other)),
                context: ErrorContext::new().with_source("lookup"),
            }),
        }
    }

    /// Send the request and read the whole body, bounded by the per-call timeout.
    ///
    /// The timer and the in-flight request live inside one `timeout` future, so
    /// whichever way this returns both are dropped.
    async fn exchange(&self, req: &RequestDescriptor) -> Result<(StatusCode, Bytes)> {
        let url = self.endpoint_url(&req.path, &req.query)?;
        let request_id = Uuid::new_v4();
        let timeout = req.timeout.unwrap_or(self.config.request_timeout);

        let mut builder = self
            .http
            .request(req.method.clone(), url.clone())
            .header(API_KEY_HEADER, self.config.api_key());
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        debug!(%request_id, method = %req.method, %url, "portainer request");
        let start = Instant::now();

        let call = async {
            let resp = builder.send().await?;
            let status = resp.status();
            let body = resp.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        match tokio::time::timeout(timeout, call).await {
            Ok(Ok((status, body))) => {
                debug!(
                    %request_id,
                    status = status.as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "portainer response"
                );
                Ok((status, body))
            }
            Ok(Err(e)) if e.is_timeout() => Err(timeout_error(req, timeout, request_id)),
            Ok(Err(e)) => {
                let reason = error_chain(&e);
                warn!(%request_id, %url, %reason, "portainer connection failed");
                Err(Error::Connection {
                    url: url.to_string(),
                    reason,
                })
            }
            Err(_elapsed) => Err(timeout_error(req, timeout, request_id)),
        }
    }
}

impl std::fmt::Debug for PortainerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortainerClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn timeout_error(req: &RequestDescriptor, timeout: Duration, request_id: Uuid) -> Error {
    let timeout_ms = timeout.as_millis() as u64;
    warn!(
        %request_id,
        method = %req.method,
        path = %req.path,
        timeout_ms,
        "portainer request timed out"
    );
    Error::Timeout {
        method: req.method.to_string(),
        path: req.path.clone(),
        timeout_ms,
    }
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    reason
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
