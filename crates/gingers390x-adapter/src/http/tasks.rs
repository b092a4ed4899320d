/*
[INPUT]:  Task identifiers issued by action endpoints
[OUTPUT]: Task records, fetched once or polled to completion
[POS]:    HTTP layer - tasks endpoints, TaskSource impl for the poller
[UPDATE]: When the tasks resource changes
*/

use async_trait::async_trait;
use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::poll::{TaskPoller, TaskSource};
use crate::types::{Task, TaskStatus};

impl GingerClient {
    /// List tasks known to the console
    ///
    /// GET /plugins/gingers390x/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.plugin_request(Method::GET, "/tasks")?;
        self.send_json(builder).await
    }

    /// Fetch the current record of a single task
    ///
    /// GET /plugins/gingers390x/tasks/{id}
    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let endpoint = format!("/tasks/{task_id}");
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Poll a task with default cadence until it reaches `expected_final`
    pub async fn wait_for_task(&self, task_id: &str, expected_final: TaskStatus) -> Result<Task> {
        TaskPoller::default().wait(self, task_id, expected_final).await
    }
}

#[async_trait]
impl TaskSource for GingerClient {
    async fn fetch_task(&self, task_id: &str) -> Result<Task> {
        self.get_task(task_id).await
    }
}
