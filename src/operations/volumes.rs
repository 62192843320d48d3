use super::action_outcome;
use crate::client::{PortainerClient, RequestDescriptor};
use crate::operations::actions::VolumeAction;
use crate::types::VolumeActionArgs;
use crate::Result;
use serde_json::{json, Value};

impl PortainerClient {
    pub async fn list_volumes(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}/docker/volumes", environment_id))
            .await
    }

    /// create / remove.
    pub async fn volume_action(&self, args: &VolumeActionArgs) -> Result<Value> {
        self.ensure_write_enabled(&format!("volumes.{}", args.action.as_str()))?;

        let route = args.action.route();
        let environment = args.environment_id.to_string();
        let path = route.expand(&[
            ("environment", environment.as_str()),
            ("id", args.name.as_str()),
        ])?;

        let req = match args.action {
            VolumeAction::Create => {
                let mut body = json!({ "Name": args.name, "Labels": args.labels });
                if let Some(driver) = &args.driver {
                    body["Driver"] = json!(driver);
                }
                RequestDescriptor::new(route.method, path).with_body(body)
            }
            VolumeAction::Remove => {
                RequestDescriptor::new(route.method, path).with_query("force", args.force)
            }
        };

        let response = self.request(req).await?;
        Ok(action_outcome(args.action.as_str(), &args.name, response))
    }
}
