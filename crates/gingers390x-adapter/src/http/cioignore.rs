/*
[INPUT]:  CIO ignore list queries and remove actions
[OUTPUT]: Ignore list contents and task descriptors for removals
[POS]:    HTTP layer - cio_ignore endpoints
[UPDATE]: When the cio_ignore resource or its body shapes change
*/

use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::types::{CioIgnoreList, RemoveDevicesRequest, Task};

impl GingerClient {
    /// Fetch the channel i/o device ignore list
    ///
    /// GET /plugins/gingers390x/cio_ignore
    pub async fn cio_ignore_list(&self) -> Result<CioIgnoreList> {
        let builder = self.plugin_request(Method::GET, "/cio_ignore")?;
        self.send_json(builder).await
    }

    /// Remove devices from the ignore list
    ///
    /// POST /plugins/gingers390x/cio_ignore/remove
    /// Accepts single bus ids and ranges. Returns a task; a request naming
    /// invalid ids yields a task that terminates "failed".
    pub async fn remove_ignored_devices(&self, devices: &[String]) -> Result<Task> {
        let request = RemoveDevicesRequest {
            devices: devices.to_vec(),
        };
        let builder = self
            .plugin_request(Method::POST, "/cio_ignore/remove")?
            .json(&request);
        self.send_json(builder).await
    }
}
