//! Stack operations.
//!
//! Stacks are addressed by numeric id upstream; `find_stack_by_name` bridges
//! the gap for callers that only know the name. Every mutating call carries the
//! owning environment as `endpointId`.

use super::action_outcome;
use crate::client::{PortainerClient, RequestDescriptor};
use crate::operations::actions::StackAction;
use crate::types::{CreateStackArgs, StackActionArgs, UpdateStackArgs};
use crate::Result;
use serde_json::{json, Value};

impl PortainerClient {
    pub async fn list_stacks(&self) -> Result<Value> {
        self.get("/stacks").await
    }

    pub async fn get_stack(&self, stack_id: u64) -> Result<Value> {
        self.get(&format!("/stacks/{}", stack_id)).await
    }

    /// Compose file of a stack, as `{"StackFileContent": "..."}`.
    pub async fn get_stack_file(&self, stack_id: u64) -> Result<Value> {
        self.get(&format!("/stacks/{}/file", stack_id)).await
    }

    pub async fn find_stack_by_name(&self, name: &str) -> Result<Value> {
        self.lookup_by_name("/stacks", "Name", name, "Stack").await
    }

    /// Deploy a standalone compose stack from inline file content.
    pub async fn create_stack(&self, args: &CreateStackArgs) -> Result<Value> {
        self.ensure_write_enabled("stacks.create")?;

        let req = RequestDescriptor::post("/stacks/create/standalone/string")
            .with_query("endpointId", args.environment_id)
            .with_body(json!({
                "name": args.name,
                "stackFileContent": args.compose_content,
                "env": args.env,
            }))
            .with_timeout(self.config().log_timeout);
        self.request(req).await.map(|r| r.into_value())
    }

    pub async fn update_stack(&self, args: &UpdateStackArgs) -> Result<Value> {
        self.ensure_write_enabled("stacks.update")?;

        let req = RequestDescriptor::put(format!("/stacks/{}", args.stack_id))
            .with_query("endpointId", args.environment_id)
            .with_body(json!({
                "stackFileContent": args.compose_content,
                "env": args.env,
                "prune": args.prune,
                "pullImage": args.pull_image,
            }))
            .with_timeout(self.config().log_timeout);
        self.request(req).await.map(|r| r.into_value())
    }

    /// start / stop / delete / redeploy.
    pub async fn stack_action(&self, args: &StackActionArgs) -> Result<Value> {
        self.ensure_write_enabled(&format!("stacks.{}", args.action.as_str()))?;

        let route = args.action.route();
        let stack_id = args.stack_id.to_string();
        let path = route.expand(&[("id", stack_id.as_str())])?;
        let mut req = RequestDescriptor::new(route.method, path)
            .with_query("endpointId", args.environment_id);
        if args.action == StackAction::Redeploy {
            req = req
                .with_body(json!({ "pullImage": args.pull_image, "prune": false }))
                .with_timeout(self.config().log_timeout);
        }

        let response = self.request(req).await?;
        Ok(action_outcome(args.action.as_str(), &stack_id, response))
    }
}
