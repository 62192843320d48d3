use crate::client::PortainerClient;
use crate::Result;
use serde_json::Value;

impl PortainerClient {
    /// Portainer instance status (`Version`, `InstanceID`).
    pub async fn system_status(&self) -> Result<Value> {
        self.get("/status").await
    }

    /// `docker info` of one environment.
    pub async fn docker_info(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}/docker/info", environment_id))
            .await
    }

    pub async fn docker_version(&self, environment_id: u64) -> Result<Value> {
        self.get(&format!("/endpoints/{}/docker/version", environment_id))
            .await
    }
}
