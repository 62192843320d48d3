use super::action_outcome;
use crate::client::{path_segment, ApiResponse, PortainerClient, RequestDescriptor};
use crate::operations::actions::ContainerAction;
use crate::types::{ContainerActionArgs, ContainerLogsArgs, ContainerRef, ListContainersArgs};
use crate::Result;
use serde_json::Value;

impl PortainerClient {
    pub async fn list_containers(&self, args: &ListContainersArgs) -> Result<Value> {
        let req = RequestDescriptor::get(format!(
            "/endpoints/{}/docker/containers/json",
            args.environment_id
        ))
        .with_query("all", args.all);
        self.request(req).await.map(ApiResponse::into_value)
    }

    pub async fn inspect_container(&self, args: &ContainerRef) -> Result<Value> {
        let container = path_segment("container_id", &args.container_id)?;
        self.get(&format!(
            "/endpoints/{}/docker/containers/{}/json",
            args.environment_id, container
        ))
        .await
    }

    pub async fn container_logs(&self, args: &ContainerLogsArgs) -> Result<String> {
        self.fetch_logs(args.environment_id, &args.container_id, args.tail)
            .await
    }

    /// start / stop / restart / kill / remove.
    pub async fn container_action(&self, args: &ContainerActionArgs) -> Result<Value> {
        self.ensure_write_enabled(&format!("containers.{}", args.action.as_str()))?;

        let route = args.action.route();
        let environment = args.environment_id.to_string();
        let path = route.expand(&[
            ("environment", environment.as_str()),
            ("id", args.container_id.as_str()),
        ])?;

        let mut req = RequestDescriptor::new(route.method, path);
        if args.action == ContainerAction::Remove {
            req = req
                .with_query("force", args.force)
                .with_query("v", args.remove_volumes);
        }

        let response = self.request(req).await?;
        Ok(action_outcome(
            args.action.as_str(),
            &args.container_id,
            response,
        ))
    }
}
