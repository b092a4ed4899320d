/*
[INPUT]:  Storage device queries and online/offline actions
[OUTPUT]: Storage device resources, updated after state changes
[POS]:    HTTP layer - storagedevices endpoints
[UPDATE]: When the storagedevices resource or its filters change
*/

use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::types::{StorageDevice, StorageDeviceType};

impl GingerClient {
    /// List DASD-ECKD and zFCP storage i/o devices
    ///
    /// GET /plugins/gingers390x/storagedevices?_type={dasd-eckd|zfcp}
    /// Without a filter both device classes are returned.
    pub async fn list_storage_devices(
        &self,
        device_type: Option<StorageDeviceType>,
    ) -> Result<Vec<StorageDevice>> {
        let endpoint = match device_type {
            Some(value) => format!("/storagedevices?_type={value}"),
            None => "/storagedevices".to_string(),
        };
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch a single storage device by bus id
    ///
    /// GET /plugins/gingers390x/storagedevices/{device}
    pub async fn get_storage_device(&self, device: &str) -> Result<StorageDevice> {
        let endpoint = format!("/storagedevices/{device}");
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Bring a storage device online
    ///
    /// POST /plugins/gingers390x/storagedevices/{device}/online
    /// Completes synchronously and returns the updated resource.
    pub async fn bring_storage_device_online(&self, device: &str) -> Result<StorageDevice> {
        let endpoint = format!("/storagedevices/{device}/online");
        let builder = self.plugin_request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }

    /// Take a storage device offline
    ///
    /// POST /plugins/gingers390x/storagedevices/{device}/offline
    /// Completes synchronously and returns the updated resource.
    pub async fn bring_storage_device_offline(&self, device: &str) -> Result<StorageDevice> {
        let endpoint = format!("/storagedevices/{device}/offline");
        let builder = self.plugin_request(Method::POST, &endpoint)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::GingerClient;
    use crate::types::StorageDeviceType;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn device_body(device: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "device": device,
            "status": status,
            "cu_type": "3990/e9",
            "device_type": "3390/0a",
            "sub_channel": "0.0.020b",
            "pim": "e0",
            "pam": "e0",
            "pom": "ff",
            "chipid": "3031343137333039",
        })
    }

    #[tokio::test]
    async fn test_list_filtered_by_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins/gingers390x/storagedevices"))
            .and(query_param("_type", "dasd-eckd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                device_body("0.0.0200", "online"),
                device_body("0.0.0201", "offline"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        let devices = client
            .list_storage_devices(Some(StorageDeviceType::DasdEckd))
            .await
            .unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].device, "0.0.0200");
    }

    #[tokio::test]
    async fn test_online_action_returns_updated_resource() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/plugins/gingers390x/storagedevices/0.0.0200/online"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(device_body("0.0.0200", "online")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        let device = client.bring_storage_device_online("0.0.0200").await.unwrap();
        assert_eq!(device.status, "online");
    }
}
