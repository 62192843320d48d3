use super::action_outcome;
use crate::client::{PortainerClient, RequestDescriptor};
use crate::operations::actions::ImageAction;
use crate::types::ImageActionArgs;
use crate::Result;
use serde_json::Value;

impl PortainerClient {
    pub async fn list_images(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}/docker/images/json", environment_id))
            .await
    }

    /// pull / remove.
    ///
    /// A pull answers with a stream of JSON progress lines rather than one
    /// document, so it is read in raw mode and returned as text.
    pub async fn image_action(&self, args: &ImageActionArgs) -> Result<Value> {
        self.ensure_write_enabled(&format!("images.{}", args.action.as_str()))?;

        let route = args.action.route();
        let environment = args.environment_id.to_string();
        let path = route.expand(&[
            ("environment", environment.as_str()),
            ("id", args.image.as_str()),
        ])?;

        let req = match args.action {
            ImageAction::Pull => RequestDescriptor::new(route.method, path)
                .with_query("fromImage", &args.image)
                .with_query("tag", args.tag.as_deref().unwrap_or("latest"))
                .with_timeout(self.config().log_timeout)
                .raw(),
            ImageAction::Remove => {
                RequestDescriptor::new(route.method, path).with_query("force", args.force)
            }
        };

        let response = self.request(req).await?;
        Ok(action_outcome(args.action.as_str(), &args.image, response))
    }
}
