/*
[INPUT]:  LUN scanning state queries and toggle actions
[OUTPUT]: Scan status and task descriptors for toggle actions
[POS]:    HTTP layer - lunscan endpoints
[UPDATE]: When the lunscan resource or its actions change
*/

use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::types::{LunScanStatus, Task};

impl GingerClient {
    /// Query the LUN scanning state
    ///
    /// GET /plugins/gingers390x/lunscan
    pub async fn lunscan_status(&self) -> Result<LunScanStatus> {
        let builder = self.plugin_request(Method::GET, "/lunscan")?;
        self.send_json(builder).await
    }

    /// Turn automatic LUN scanning on
    ///
    /// POST /plugins/gingers390x/lunscan/enable
    /// Returns a task; poll it, then re-read the status to observe the
    /// toggled state.
    pub async fn enable_lunscan(&self) -> Result<Task> {
        let builder = self.plugin_request(Method::POST, "/lunscan/enable")?;
        self.send_json(builder).await
    }

    /// Turn automatic LUN scanning off
    ///
    /// POST /plugins/gingers390x/lunscan/disable
    pub async fn disable_lunscan(&self) -> Result<Task> {
        let builder = self.plugin_request(Method::POST, "/lunscan/disable")?;
        self.send_json(builder).await
    }

    /// Start a one-shot scan of all zFCP adapters
    ///
    /// POST /plugins/gingers390x/lunscan/trigger
    pub async fn trigger_lunscan(&self) -> Result<Task> {
        let builder = self.plugin_request(Method::POST, "/lunscan/trigger")?;
        self.send_json(builder).await
    }
}
