use super::action_outcome;
use crate::client::{PortainerClient, RequestDescriptor};
use crate::operations::actions::NetworkAction;
use crate::types::NetworkActionArgs;
use crate::Result;
use serde_json::{json, Value};

impl PortainerClient {
    pub async fn list_networks(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}/docker/networks", environment_id))
            .await
    }

    /// create / remove.
    pub async fn network_action(&self, args: &NetworkActionArgs) -> Result<Value> {
        self.ensure_write_enabled(&format!("networks.{}", args.action.as_str()))?;

        let route = args.action.route();
        let environment = args.environment_id.to_string();
        let path = route.expand(&[
            ("environment", environment.as_str()),
            ("id", args.name.as_str()),
        ])?;

        let mut req = RequestDescriptor::new(route.method, path);
        if args.action == NetworkAction::Create {
            let mut body = json!({
                "Name": args.name,
                "Labels": args.labels,
                "CheckDuplicate": true,
            });
            if let Some(driver) = &args.driver {
                body["Driver"] = json!(driver);
            }
            req = req.with_body(body);
        }

        let response = self.request(req).await?;
        Ok(action_outcome(args.action.as_str(), &args.name, response))
    }
}
