//! Action keywords and their route table.
//!
//! Each tool that takes an `action` field selects one variant of a closed enum.
//! The enum maps to an `(HTTP method, path template)` pair through `route()`;
//! call sites never branch on the action to pick a URL.

use crate::client::path_segment;
use crate::Result;
use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HTTP method plus a path template with `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub template: &'static str,
}

impl Route {
    fn new(method: Method, template: &'static str) -> Self {
        Self { method, template }
    }

    /// Substitute `{name}` placeholders with percent-encoded values.
    pub fn expand(&self, params: &[(&str, &str)]) -> Result<String> {
        let mut path = self.template.to_string();
        for (name, value) in params {
            let segment = path_segment(name, value)?;
            path = path.replace(&format!("{{{}}}", name), &segment);
        }
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContainerAction {
    Start,
    Stop,
    Restart,
    Kill,
    Remove,
}

impl ContainerAction {
    pub fn route(self) -> Route {
        match self {
            Self::Start => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/containers/{id}/start",
            ),
            Self::Stop => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/containers/{id}/stop",
            ),
            Self::Restart => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/containers/{id}/restart",
            ),
            Self::Kill => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/containers/{id}/kill",
            ),
            Self::Remove => Route::new(
                Method::DELETE,
                "/endpoints/{environment}/docker/containers/{id}",
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Kill => "kill",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StackAction {
    Start,
    Stop,
    Delete,
    /// Re-pull a git-backed stack and redeploy it.
    Redeploy,
}

impl StackAction {
    pub fn route(self) -> Route {
        match self {
            Self::Start => Route::new(Method::POST, "/stacks/{id}/start"),
            Self::Stop => Route::new(Method::POST, "/stacks/{id}/stop"),
            Self::Delete => Route::new(Method::DELETE, "/stacks/{id}"),
            Self::Redeploy => Route::new(Method::PUT, "/stacks/{id}/git/redeploy"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Delete => "delete",
            Self::Redeploy => "redeploy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageAction {
    Pull,
    Remove,
}

impl ImageAction {
    pub fn route(self) -> Route {
        match self {
            Self::Pull => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/images/create",
            ),
            Self::Remove => Route::new(
                Method::DELETE,
                "/endpoints/{environment}/docker/images/{id}",
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VolumeAction {
    Create,
    Remove,
}

impl VolumeAction {
    pub fn route(self) -> Route {
        match self {
            Self::Create => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/volumes/create",
            ),
            Self::Remove => Route::new(
                Method::DELETE,
                "/endpoints/{environment}/docker/volumes/{id}",
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NetworkAction {
    Create,
    Remove,
}

impl NetworkAction {
    pub fn route(self) -> Route {
        match self {
            Self::Create => Route::new(
                Method::POST,
                "/endpoints/{environment}/docker/networks/create",
            ),
            Self::Remove => Route::new(
                Method::DELETE,
                "/endpoints/{environment}/docker/networks/{id}",
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Remove => "remove",
        }
    }
}
