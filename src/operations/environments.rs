use crate::client::PortainerClient;
use crate::Result;
use serde_json::Value;

impl PortainerClient {
    /// Environments are Portainer "endpoints" on the wire.
    pub async fn list_environments(&self) -> Result<Value> {
        self.get("/endpoints").await
    }

    pub async fn get_environment(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}", environment_id)).await
    }

    pub async fn find_environment_by_name(&self, name: &str) -> Result<Value> {
        self.lookup_by_name("/endpoints", "Name", name, "Environment")
            .await
    }
}
