/*
[INPUT]:  Network device queries and configure/unconfigure actions
[OUTPUT]: Network device resources and task descriptors for actions
[POS]:    HTTP layer - nwdevices endpoints
[UPDATE]: When the nwdevices resource or its filters change
*/

use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::types::{NetworkDevice, Task};

impl GingerClient {
    /// List CCW network i/o devices of type OSA
    ///
    /// GET /plugins/gingers390x/nwdevices?_configured={true|false}
    /// Without a filter every defined device is returned.
    pub async fn list_network_devices(&self, configured: Option<bool>) -> Result<Vec<NetworkDevice>> {
        let endpoint = match configured {
            Some(value) => format!("/nwdevices?_configured={value}"),
            None => "/nwdevices".to_string(),
        };
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch a single network device
    ///
    /// GET /plugins/gingers390x/nwdevices/{name}
    pub async fn get_network_device(&self, name: &str) -> Result<NetworkDevice> {
        let endpoint = format!("/nwdevices/{name}");
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Configure a network device (group its subchannels, bring it online)
    ///
    /// POST /plugins/gingers390x/nwdevices/{id}/configure
    /// Returns a task to poll.
    pub async fn configure_network_device(&self, device_id: &str) -> Result<Task> {
        let endpoint = format!("/nwdevices/{device_id}/configure");
        let builder = self.plugin_request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }

    /// Un-configure a network device
    ///
    /// POST /plugins/gingers390x/nwdevices/{id}/unconfigure
    /// Returns a task to poll.
    pub async fn unconfigure_network_device(&self, device_id: &str) -> Result<Task> {
        let endpoint = format!("/nwdevices/{device_id}/unconfigure");
        let builder = self.plugin_request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }
}
