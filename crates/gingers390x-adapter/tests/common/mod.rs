/*
[INPUT]:  Test configuration and mock console requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gingers390x-adapter tests

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use gingers390x_adapter::TaskPoller;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// Start a mock console for testing
pub async fn mock_console() -> MockServer {
    MockServer::start().await
}

/// A poller with a short interval so task flows finish quickly in tests
#[allow(dead_code)]
pub fn fast_poller() -> TaskPoller {
    TaskPoller::new(Duration::from_millis(10), 10)
}

/// Task record body as the console serializes it
#[allow(dead_code)]
pub fn task_body(id: &str, status: &str, message: &str, target_uri: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "message": message,
        "target_uri": target_uri,
    })
}

/// Mock task-status provider: answers "running" a fixed number of times,
/// then a terminal record. Mount on `GET /plugins/gingers390x/tasks/{id}`.
#[allow(dead_code)]
pub struct TaskSequenceResponder {
    task_id: String,
    target_uri: String,
    running_polls: u32,
    final_status: String,
    calls: AtomicU32,
}

impl TaskSequenceResponder {
    #[allow(dead_code)]
    pub fn new(task_id: &str, target_uri: &str, running_polls: u32, final_status: &str) -> Self {
        Self {
            task_id: task_id.to_string(),
            target_uri: target_uri.to_string(),
            running_polls,
            final_status: final_status.to_string(),
            calls: AtomicU32::new(0),
        }
    }
}

impl Respond for TaskSequenceResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (status, message) = if call < self.running_polls {
            ("running", "operation in progress")
        } else {
            (self.final_status.as_str(), "operation completed")
        };
        ResponseTemplate::new(200)
            .set_body_json(task_body(&self.task_id, status, message, &self.target_uri))
    }
}
