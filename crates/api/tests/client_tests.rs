use scaffold_api::{ApiError, ScaffoldClient};
use scaffold_types::{Task, User};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "MyCoolPrimaryKey12345";

async fn client_for(server: &MockServer) -> ScaffoldClient {
    ScaffoldClient::new(&server.uri(), TOKEN).expect("build client")
}

#[tokio::test]
async fn lists_workflows_with_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workflow"))
        .and(header("Authorization", "X-Scaffold-API MyCoolPrimaryKey12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "foo", "version": "v1", "groups": ["foo"]},
            {"name": "no-group", "version": "v1", "groups": null}
        ])))
        .mount(&server)
        .await;

    let response = client_for(&server).await.workflows(true).await.expect("list");
    assert!(response.is_success());
    let workflows = response.into_body().expect("body");
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[0].groups, vec!["foo".to_string()]);
    assert!(workflows[1].groups.is_empty());
}

#[tokio::test]
async fn creates_user_with_every_declared_key() {
    let server = MockServer::start().await;
    let user = User {
        username: "foo".into(),
        groups: vec!["foo".into()],
        ..User::default()
    };
    let expected_body = serde_json::to_value(&user).unwrap();
    Mock::given(method("POST"))
        .and(path("/api/v1/user"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).await.create_user(&user, true).await.expect("create");
    assert_eq!(response.status.as_u16(), 201);
}

#[tokio::test]
async fn error_status_fails_when_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workflow/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("workflow not found"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.workflow("missing", true).await.unwrap_err();
    match &error {
        ApiError::Status { status, body_preview, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body_preview, "workflow not found");
        }
        other => panic!("unexpected error: {other}"),
    }

    let response = client.workflow("missing", false).await.expect("status only");
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn task_routes_are_scoped_by_workflow() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/task/foo/write_file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "write_file"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/task/foo/write_file/enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"disabled": true})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/task/foo"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let task = Task {
        name: "write_file".into(),
        workflow: "foo".into(),
        ..Task::default()
    };
    let updated = client.update_task(&task, true).await.expect("update").into_body().expect("body");
    assert_eq!(updated["name"], "write_file");

    let toggled = client.toggle_task_enabled("foo", "write_file", true).await.expect("toggle");
    assert_eq!(toggled.body, Some(json!({"disabled": true})));

    assert!(client.delete_workflow_tasks("foo", true).await.expect("delete").is_success());
}

#[tokio::test]
async fn webhook_posts_optional_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/webhook/foo/hook"))
        .and(body_json(json!({"ref": "main"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .trigger_webhook("foo", "hook", Some(&json!({"ref": "main"})), true)
        .await
        .expect("trigger");
    assert_eq!(response.status.as_u16(), 201);
}

#[tokio::test]
async fn dependent_task_update_sends_changed_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/input/foo/update"))
        .and(body_json(json!(["message", "target"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": 2})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let changed = vec!["message".to_string(), "target".to_string()];
    let response = client.update_dependent_tasks("foo", &changed, true).await.expect("update");
    assert_eq!(response.into_body().expect("body")["updated"], 2);
}

#[tokio::test]
async fn history_decodes_states() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/history/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "run_id": "run-1",
            "workflow": "foo",
            "states": [{"task": "write_file", "status": "success"}]
        })))
        .mount(&server)
        .await;

    let history = client_for(&server)
        .await
        .history("run-1", true)
        .await
        .expect("history")
        .into_body()
        .expect("body");
    assert_eq!(history.workflow, "foo");
    assert_eq!(history.states[0].status, "success");
}

#[tokio::test]
async fn malformed_json_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workflow/foo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).await.workflow("foo", true).await.unwrap_err();
    assert!(matches!(error, ApiError::Json(_)));
}

#[test]
fn rejects_unsupported_base_url() {
    let error = ScaffoldClient::new("ftp://localhost:2997", TOKEN).unwrap_err();
    assert!(matches!(error, ApiError::InvalidBaseUrl { .. }));
}

/// Serve one response whose body stops short of its declared length.
async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"name\"")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{address}")
}

#[tokio::test]
async fn body_read_failure_is_reported_as_transport_error() {
    let base_url = truncated_body_server().await;
    let client = ScaffoldClient::new(&base_url, TOKEN).expect("build client");

    let error = client.create_task(&Task::default(), false).await.unwrap_err();
    assert!(matches!(error, ApiError::Http { .. }), "unexpected error: {error:?}");
}
