//! Write gate: mutating operations never reach the network while writes are disabled

use crate::integration::mock_server::MockServerFixture;
use portainer_mcp_rust::operations::{
    ContainerAction, ImageAction, NetworkAction, StackAction, VolumeAction,
};
use portainer_mcp_rust::types::*;
use portainer_mcp_rust::{ErrorCode, RequestDescriptor, Result};
use serde_json::Value;
use std::collections::BTreeMap;

fn assert_write_disabled(result: Result<Value>, operation: &str) {
    let err = result.expect_err(operation);
    assert_eq!(err.code(), ErrorCode::WriteDisabled, "{}", operation);
    assert_eq!(err.code().to_string(), "WRITE_DISABLED");
}

#[tokio::test]
async fn test_every_mutating_operation_is_rejected_without_network() {
    let mut fixture = MockServerFixture::new().await;
    let guards = fixture.forbid_all_requests().await;
    let client = fixture.client(false);

    for action in [
        ContainerAction::Start,
        ContainerAction::Stop,
        ContainerAction::Restart,
        ContainerAction::Kill,
        ContainerAction::Remove,
    ] {
        let args = ContainerActionArgs {
            environment_id: 1,
            container_id: "web".into(),
            action,
            force: true,
            remove_volumes: true,
        };
        assert_write_disabled(client.container_action(&args).await, action.as_str());
    }

    for action in [
        StackAction::Start,
        StackAction::Stop,
        StackAction::Delete,
        StackAction::Redeploy,
    ] {
        let args = StackActionArgs {
            stack_id: 7,
            environment_id: 1,
            action,
            pull_image: true,
        };
        assert_write_disabled(client.stack_action(&args).await, action.as_str());
    }

    let create = CreateStackArgs {
        environment_id: 1,
        name: "web".into(),
        compose_content: "services: {}".into(),
        env: Vec::new(),
    };
    assert_write_disabled(client.create_stack(&create).await, "stacks.create");

    let update = UpdateStackArgs {
        stack_id: 7,
        environment_id: 1,
        compose_content: "services: {}".into(),
        env: Vec::new(),
        prune: true,
        pull_image: true,
    };
    assert_write_disabled(client.update_stack(&update).await, "stacks.update");

    for action in [ImageAction::Pull, ImageAction::Remove] {
        let args = ImageActionArgs {
            environment_id: 1,
            image: "nginx".into(),
            action,
            tag: None,
            force: false,
        };
        assert_write_disabled(client.image_action(&args).await, action.as_str());
    }

    for action in [VolumeAction::Create, VolumeAction::Remove] {
        let args = VolumeActionArgs {
            environment_id: 1,
            name: "data".into(),
            action,
            driver: None,
            labels: BTreeMap::new(),
            force: false,
        };
        assert_write_disabled(client.volume_action(&args).await, action.as_str());
    }

    for action in [NetworkAction::Create, NetworkAction::Remove] {
        let args = NetworkActionArgs {
            environment_id: 1,
            name: "backend".into(),
            action,
            driver: None,
            labels: BTreeMap::new(),
        };
        assert_write_disabled(client.network_action(&args).await, action.as_str());
    }

    for guard in guards {
        guard.assert_async().await;
    }
}

#[tokio::test]
async fn test_raw_mutating_requests_are_gated() {
    let mut fixture = MockServerFixture::new().await;
    let guards = fixture.forbid_all_requests().await;
    let client = fixture.client(false);

    for req in [
        RequestDescriptor::delete("/stacks/7"),
        RequestDescriptor::post("/endpoints/1/docker/containers/web/stop"),
        RequestDescriptor::put("/stacks/7").with_query("endpointId", 1),
    ] {
        let label = format!("{} {}", req.method, req.path);
        let err = client.request(req).await.expect_err(&label);
        assert_eq!(err.code(), ErrorCode::WriteDisabled, "{}", label);
        assert!(err.to_string().contains(&label));
    }

    for guard in guards {
        guard.assert_async().await;
    }
}

#[tokio::test]
async fn test_raw_read_request_is_not_gated() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/api/status", 200, r#"{"Version":"2.19.4"}"#)
        .await;

    let status = fixture
        .client(false)
        .request(RequestDescriptor::get("/status"))
        .await
        .unwrap()
        .into_value();
    assert_eq!(status["Version"], "2.19.4");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reads_are_not_gated() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_json("GET", "/api/stacks", 200, "[]").await;

    let stacks = fixture.client(false).list_stacks().await.unwrap();
    assert_eq!(stacks, serde_json::json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_enabled_client_issues_the_call() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/api/endpoints/1/docker/containers/web/restart")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let outcome = fixture
        .client(true)
        .container_action(&ContainerActionArgs {
            environment_id: 1,
            container_id: "web".into(),
            action: ContainerAction::Restart,
            force: false,
            remove_volumes: false,
        })
        .await
        .unwrap();

    assert_eq!(outcome["success"], true);
    assert_eq!(outcome["action"], "restart");
    mock.assert_async().await;
}
