//! Named operations exposed to the tool-dispatch layer.
//!
//! Each operation takes already-validated typed arguments and returns a plain
//! JSON value or a classified error. Mutating operations pass the write gate
//! before anything else happens.

pub mod actions;
mod containers;
mod environments;
mod images;
mod networks;
mod stacks;
mod system;
mod volumes;

pub use actions::{ContainerAction, ImageAction, NetworkAction, Route, StackAction, VolumeAction};

use crate::client::ApiResponse;
use serde_json::{json, Value};

/// Result shape for mutating operations, many of which answer `204 No Content`.
pub(crate) fn action_outcome(action: &str, target: &str, response: ApiResponse) -> Value {
    json!({
        "success": true,
        "action": action,
        "target": target,
        "response": response.into_value(),
    })
}
