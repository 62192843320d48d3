//! # portainer-mcp-rust
//!
//! Client core for exposing a Portainer instance as a set of tool operations.
//!
//! ## Overview
//!
//! The crate turns logical operations (list containers, restart a container,
//! redeploy a stack, read logs) into Portainer REST calls and turns every
//! outcome into either a JSON value or a classified [`Error`]. Schema
//! validation, tool dispatch and the stdio transport belong to the embedding
//! server; this crate only sees typed arguments.
//!
//! ## Key Features
//!
//! - **One request primitive**: [`PortainerClient::request`] injects the API key,
//!   bounds the call with a per-call timeout and classifies failures
//! - **Write gate**: mutating operations fail with `WRITE_DISABLED` before any
//!   network activity unless writes are enabled in [`ClientConfig`]
//! - **Log demultiplexing**: [`logs::demux`] decodes Docker's multiplexed
//!   stdout/stderr stream and passes TTY output through untouched
//! - **Stable error codes**: [`error_code::ErrorCode`] (`HTTP_404`, `TIMEOUT`, ...)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portainer_mcp_rust::{ClientConfig, PortainerClient};
//! use portainer_mcp_rust::types::ContainerLogsArgs;
//!
//! #[tokio::main]
//! async fn main() -> portainer_mcp_rust::Result<()> {
//!     let client = PortainerClient::new(
//!         ClientConfig::new("https://portainer.example.com:9443", "ptr_xxx"),
//!     )?;
//!
//!     let environments = client.list_environments().await?;
//!     println!("{}", environments);
//!
//!     let logs = client
//!         .container_logs(&ContainerLogsArgs {
//!             environment_id: 1,
//!             container_id: "web".into(),
//!             tail: 200,
//!         })
//!         .await?;
//!     print!("{}", logs);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request lifecycle, write gate, log fetch, name lookup |
//! | [`operations`] | Named container/stack/image/volume/network/environment/system operations |
//! | [`logs`] | Docker log stream demultiplexer and tail clamping |
//! | [`types`] | Typed operation arguments |
//! | [`config`] | Client configuration and environment loading |
//! | [`error_code`] | Stable machine-readable error codes |

pub mod client;
pub mod config;
pub mod error_code;
pub mod logs;
pub mod operations;
pub mod types;

pub use client::{ApiResponse, PortainerClient, RequestDescriptor};
pub use config::ClientConfig;
pub use error_code::ErrorCode;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
