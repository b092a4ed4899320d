/*
[INPUT]:  Console API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the console API schema changes or new types are added
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /plugins/gingers390x/fcluns`.
///
/// All three fields are required; the console rejects a partial body
/// with 400.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFcLunRequest {
    #[serde(rename = "hbaId")]
    pub hba_id: String,
    #[serde(rename = "remoteWwpn")]
    pub remote_wwpn: String,
    #[serde(rename = "lunId")]
    pub lun_id: String,
}

impl AddFcLunRequest {
    /// Resource identifier the new LUN will be addressable under.
    pub fn resource_id(&self) -> String {
        format!("{}:{}:{}", self.hba_id, self.remote_wwpn, self.lun_id)
    }
}

/// Body of `POST /plugins/gingers390x/cio_ignore/remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveDevicesRequest {
    pub devices: Vec<String>,
}
