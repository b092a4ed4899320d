/*
[INPUT]:  Console API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the console API schema changes or new types are added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of an asynchronous console task.
///
/// The console reports status as a free-form string. The known values get
/// their own variants; anything else is captured in `Other` so the poller
/// can surface it instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Running,
    Finished,
    Failed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Running => "running",
            TaskStatus::Finished => "finished",
            TaskStatus::Failed => "failed",
            TaskStatus::Other(value) => value,
        }
    }

    /// Whether no further status transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Finished | TaskStatus::Failed)
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "running" => TaskStatus::Running,
            "finished" => TaskStatus::Finished,
            "failed" => TaskStatus::Failed,
            _ => TaskStatus::Other(value),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage i/o device classes accepted by the `_type` collection filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageDeviceType {
    #[serde(rename = "dasd-eckd")]
    DasdEckd,
    #[serde(rename = "zfcp")]
    Zfcp,
}

impl StorageDeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageDeviceType::DasdEckd => "dasd-eckd",
            StorageDeviceType::Zfcp => "zfcp",
        }
    }
}

impl fmt::Display for StorageDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
