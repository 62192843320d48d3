//! Portainer API client.
//!
//! Keep the public surface small: one request primitive, one log primitive and
//! the write gate. The named operations live in [`crate::operations`] as
//! further `impl PortainerClient` blocks.

pub mod core;
mod error_classification;
pub mod lookup;
pub mod request;

pub use core::{PortainerClient, API_KEY_HEADER, API_ROOT};
pub use lookup::find_by_name;
pub use request::{path_segment, ApiResponse, RequestDescriptor};
