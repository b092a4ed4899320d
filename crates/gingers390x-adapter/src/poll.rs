/*
[INPUT]:  Task id, expected terminal status, injected status fetch
[OUTPUT]: Final task record, or timeout/unexpected-status failure
[POS]:    Task-completion polling used by every action endpoint caller
[UPDATE]: When changing poll cadence or terminal-state policy
*/

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::http::{GingerError, Result};
use crate::types::{Task, TaskStatus};

/// Wait between successive status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Polls answered with the in-progress status before declaring timeout.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Source of task records, injected into the poller.
///
/// `GingerClient` implements this over `GET /tasks/{id}`; tests substitute
/// scripted stubs.
#[async_trait]
pub trait TaskSource {
    async fn fetch_task(&self, task_id: &str) -> Result<Task>;
}

/// Blocks a caller until a submitted task reaches the terminal status it
/// expects, or fails after a bounded number of polls.
///
/// The policy is strict: a status that is neither the in-progress value nor
/// the expected terminal value fails immediately with the full record.
/// Errors from the fetch itself propagate unchanged; there is no retry on
/// transport failure and no cancellation primitive.
#[derive(Debug, Clone)]
pub struct TaskPoller {
    interval: Duration,
    max_attempts: u32,
    in_progress: TaskStatus,
}

impl Default for TaskPoller {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            in_progress: TaskStatus::Running,
        }
    }
}

impl TaskPoller {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            in_progress: TaskStatus::Running,
        }
    }

    /// Override the status treated as "still making progress".
    pub fn in_progress_status(mut self, status: TaskStatus) -> Self {
        self.in_progress = status;
        self
    }

    /// Poll `source` until the task reports `expected_final`.
    ///
    /// Returns the final record. The attempt counter bounds the number of
    /// in-progress polls, not wall-clock time; a slow fetch adds to the
    /// total wait on top of the sleep interval.
    pub async fn wait<S>(&self, source: &S, task_id: &str, expected_final: TaskStatus) -> Result<Task>
    where
        S: TaskSource + ?Sized,
    {
        let mut attempts = 0u32;
        loop {
            let task = source.fetch_task(task_id).await?;
            if task.status == self.in_progress {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(GingerError::TaskTimeout {
                        task_id: task_id.to_string(),
                        max_attempts: self.max_attempts,
                    });
                }
                debug!(task_id, attempt = attempts, "task still in progress");
                tokio::time::sleep(self.interval).await;
            } else if task.status == expected_final {
                debug!(task_id, status = %task.status, "task reached expected status");
                return Ok(task);
            } else {
                return Err(GingerError::UnexpectedTaskStatus { task });
            }
        }
    }
}
