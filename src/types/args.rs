//! Typed tool arguments.
//!
//! These are what the dispatch layer hands to the operations after validating
//! free-form tool input. `JsonSchema` lets that layer derive tool input schemas
//! straight from the types.

use crate::logs::DEFAULT_TAIL;
use crate::operations::actions::{
    ContainerAction, ImageAction, NetworkAction, StackAction, VolumeAction,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_tail() -> i64 {
    DEFAULT_TAIL
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListContainersArgs {
    pub environment_id: u64,
    /// Include stopped containers.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContainerRef {
    pub environment_id: u64,
    /// Container id or name.
    pub container_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContainerLogsArgs {
    pub environment_id: u64,
    pub container_id: String,
    /// Number of most recent lines; clamped to 1..=10000.
    #[serde(default = "default_tail")]
    pub tail: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContainerActionArgs {
    pub environment_id: u64,
    pub container_id: String,
    pub action: ContainerAction,
    /// `remove` only: kill a running container first.
    #[serde(default)]
    pub force: bool,
    /// `remove` only: also remove anonymous volumes.
    #[serde(default)]
    pub remove_volumes: bool,
}

/// One stack environment variable, in Portainer's `{name, value}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateStackArgs {
    pub environment_id: u64,
    pub name: String,
    /// docker-compose file content.
    pub compose_content: String,
    #[serde(default)]
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStackArgs {
    pub stack_id: u64,
    pub environment_id: u64,
    pub compose_content: String,
    #[serde(default)]
    pub env: Vec<EnvVar>,
    /// Remove services no longer present in the compose file.
    #[serde(default)]
    pub prune: bool,
    #[serde(default)]
    pub pull_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StackActionArgs {
    pub stack_id: u64,
    pub environment_id: u64,
    pub action: StackAction,
    /// `redeploy` only: pull images before redeploying.
    #[serde(default = "default_true")]
    pub pull_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageActionArgs {
    pub environment_id: u64,
    /// Image reference, e.g. `nginx` or `ghcr.io/org/app`.
    pub image: String,
    pub action: ImageAction,
    /// `pull` only; defaults to `latest`.
    #[serde(default)]
    pub tag: Option<String>,
    /// `remove` only.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VolumeActionArgs {
    pub environment_id: u64,
    pub name: String,
    pub action: VolumeAction,
    /// `create` only; Docker defaults to `local`.
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// `remove` only.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkActionArgs {
    pub environment_id: u64,
    /// Network name (create) or name/id (remove).
    pub name: String,
    pub action: NetworkAction,
    /// `create` only; Docker defaults to `bridge`.
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}
