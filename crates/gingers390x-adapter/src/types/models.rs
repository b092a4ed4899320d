/*
[INPUT]:  Console API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the console API schema changes or new types are added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// An asynchronous console task tracking a device-control action.
///
/// Created by the console when it accepts a state-changing request; mutated
/// only by the console's task subsystem as the operation progresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub status: TaskStatus,
    pub message: String,
    pub target_uri: String,
}

/// State of the automatic LUN scanning toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunScanStatus {
    /// Scanning state of the running system.
    pub current: bool,
    /// Scanning state persisted for the next boot.
    pub boot: bool,
}

/// A Fibre-Channel LUN visible through a zFCP host bus adapter.
///
/// A LUN resource is addressed as `<hbaId>:<remoteWwpn>:<lunId>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcLun {
    pub status: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub vendor: String,
    pub configured: String,
    #[serde(rename = "hbaId")]
    pub hba_id: String,
    #[serde(rename = "remoteWwpn")]
    pub remote_wwpn: String,
    #[serde(default, rename = "controllerSN")]
    pub controller_sn: String,
    #[serde(rename = "lunId")]
    pub lun_id: String,
    #[serde(rename = "type")]
    pub device_type: String,
}

impl FcLun {
    pub fn is_configured(&self) -> bool {
        self.configured.eq_ignore_ascii_case("true")
    }

    /// Resource identifier used in the collection URI.
    pub fn resource_id(&self) -> String {
        format!("{}:{}:{}", self.hba_id, self.remote_wwpn, self.lun_id)
    }
}

/// A CCW network i/o device of type OSA (qeth driver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDevice {
    pub name: String,
    pub driver: String,
    pub card_type: String,
    #[serde(default)]
    pub chpid: String,
    pub state: String,
    pub device_ids: Vec<String>,
    #[serde(rename = "type")]
    pub device_type: String,
}

/// A DASD-ECKD or zFCP storage i/o device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDevice {
    pub device: String,
    pub status: String,
    pub cu_type: String,
    pub device_type: String,
    pub sub_channel: String,
    pub pim: String,
    pub pam: String,
    pub pom: String,
    pub chipid: String,
}

/// Devices currently blacklisted from channel i/o.
///
/// Entries are single bus ids or ranges such as `0.0.0021-0.0.ffff`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CioIgnoreList {
    pub ignored_devices: Vec<String>,
}
