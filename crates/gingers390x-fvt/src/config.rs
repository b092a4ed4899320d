/*
[INPUT]:  YAML run configuration file
[OUTPUT]: Parsed console connection settings and device fixtures
[POS]:    Configuration layer - run setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

/// Top-level configuration for an FVT run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FvtConfig {
    /// Console connection settings
    pub console: ConsoleConfig,
    /// Devices the mutating scenarios are allowed to operate on
    #[serde(default)]
    pub fixtures: Fixtures,
}

/// Console connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Base URL of the console, e.g. "https://zhost.example.com:8001"
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Accept the console's self-signed TLS certificate
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Seconds between task status polls
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Polls before a task is declared stuck
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
}

/// Per-suite device fixtures
///
/// A scenario whose fixture is absent is skipped, never failed. Fixtures
/// are passed into each scenario explicitly; suites share no state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Fixtures {
    #[serde(default)]
    pub nwdevices: Option<NwDeviceFixture>,
    #[serde(default)]
    pub storagedevices: Option<StorageDeviceFixture>,
    #[serde(default)]
    pub fcluns: Option<FcLunFixture>,
    #[serde(default)]
    pub cio_ignore: Option<CioIgnoreFixture>,
}

/// Network i/o devices available for configure/unconfigure scenarios
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NwDeviceFixture {
    /// Device currently configured, e.g. "enccw0.0.1530"
    #[serde(default)]
    pub configured_device: Option<String>,
    /// Device currently un-configured, e.g. "0.0.1600"
    #[serde(default)]
    pub unconfigured_device: Option<String>,
}

/// Storage i/o devices available for online/offline scenarios
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageDeviceFixture {
    #[serde(default)]
    pub online_dasdeckd_device: Option<String>,
    #[serde(default)]
    pub offline_dasdeckd_device: Option<String>,
    #[serde(default)]
    pub online_zfcp_device: Option<String>,
    #[serde(default)]
    pub offline_zfcp_device: Option<String>,
}

/// LUN used by the add/get/remove scenario
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FcLunFixture {
    pub hba_id: String,
    pub remote_wwpn: String,
    pub lun_id: String,
}

/// Devices removable from the channel i/o ignore list
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CioIgnoreFixture {
    #[serde(default)]
    pub remove_devices: Vec<String>,
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_poll_attempts() -> u32 {
    10
}

impl FvtConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
