/*
[INPUT]:  Mock console responses for the lunscan resource
[OUTPUT]: Verified enable/disable/trigger flows including task polling
[POS]:    Integration tests - lunscan endpoints
[UPDATE]: When the lunscan resource changes
*/

mod common;

use common::{TaskSequenceResponder, fast_poller, mock_console, task_body};
use gingers390x_adapter::{GingerClient, GingerError, TaskStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn lunscan_status_roundtrip() {
    let server = mock_console().await;
    Mock::given(method("GET"))
        .and(path("/plugins/gingers390x/lunscan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": false,
            "boot": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let status = client.lunscan_status().await.unwrap();
    assert!(!status.current);
    assert!(status.boot);
}

#[tokio::test]
async fn enable_lunscan_polls_task_then_observes_enabled_state() {
    let server = mock_console().await;

    Mock::given(method("POST"))
        .and(path("/plugins/gingers390x/lunscan/enable"))
        .respond_with(ResponseTemplate::new(202).set_body_json(task_body(
            "21",
            "running",
            "enabling lun scan",
            "/plugins/gingers390x/lunscan",
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plugins/gingers390x/tasks/21"))
        .respond_with(TaskSequenceResponder::new(
            "21",
            "/plugins/gingers390x/lunscan",
            2,
            "finished",
        ))
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plugins/gingers390x/lunscan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": true,
            "boot": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let task = client.enable_lunscan().await.unwrap();
    assert_eq!(task.status, TaskStatus::Running);

    let finished = fast_poller()
        .wait(&client, &task.id, TaskStatus::Finished)
        .await
        .unwrap();
    assert_eq!(finished.status, TaskStatus::Finished);

    let status = client.lunscan_status().await.unwrap();
    assert!(status.current);
}

#[tokio::test]
async fn disable_lunscan_returns_task() {
    let server = mock_console().await;
    Mock::given(method("POST"))
        .and(path("/plugins/gingers390x/lunscan/disable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body(
            "22",
            "finished",
            "lun scan disabled",
            "/plugins/gingers390x/lunscan",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let task = client.disable_lunscan().await.unwrap();
    assert_eq!(task.status, TaskStatus::Finished);
}

#[tokio::test]
async fn trigger_lunscan_that_never_finishes_times_out() {
    let server = mock_console().await;

    Mock::given(method("POST"))
        .and(path("/plugins/gingers390x/lunscan/trigger"))
        .respond_with(ResponseTemplate::new(202).set_body_json(task_body(
            "23",
            "running",
            "scanning adapters",
            "/plugins/gingers390x/lunscan",
        )))
        .mount(&server)
        .await;

    // Never leaves "running": the poller must give up after its bound.
    Mock::given(method("GET"))
        .and(path("/plugins/gingers390x/tasks/23"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_body(
            "23",
            "running",
            "scanning adapters",
            "/plugins/gingers390x/lunscan",
        )))
        .expect(11)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let task = client.trigger_lunscan().await.unwrap();

    let err = fast_poller()
        .wait(&client, &task.id, TaskStatus::Finished)
        .await
        .unwrap_err();
    match err {
        GingerError::TaskTimeout { task_id, max_attempts } => {
            assert_eq!(task_id, "23");
            assert_eq!(max_attempts, 10);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
