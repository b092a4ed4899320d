/*
[INPUT]:  FC LUN collection queries, add and remove requests
[OUTPUT]: LUN resources and add/remove confirmations
[POS]:    HTTP layer - fcluns endpoints
[UPDATE]: When the fcluns resource or its body shapes change
*/

use reqwest::Method;

use crate::http::{GingerClient, Result};
use crate::types::{AddFcLunRequest, FcLun};

impl GingerClient {
    /// List all FC LUNs visible on the system
    ///
    /// GET /plugins/gingers390x/fcluns
    pub async fn list_fc_luns(&self) -> Result<Vec<FcLun>> {
        let builder = self.plugin_request(Method::GET, "/fcluns")?;
        self.send_json(builder).await
    }

    /// Fetch a single LUN
    ///
    /// GET /plugins/gingers390x/fcluns/{hbaId}:{remoteWwpn}:{lunId}
    pub async fn get_fc_lun(&self, lun_id: &str) -> Result<FcLun> {
        let endpoint = format!("/fcluns/{lun_id}");
        let builder = self.plugin_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Add a LUN behind a zFCP adapter
    ///
    /// POST /plugins/gingers390x/fcluns
    /// Success is 201 with no body.
    pub async fn add_fc_lun(&self, request: &AddFcLunRequest) -> Result<()> {
        let builder = self.plugin_request(Method::POST, "/fcluns")?.json(request);
        self.send_no_content(builder).await
    }

    /// Remove a LUN
    ///
    /// DELETE /plugins/gingers390x/fcluns/{hbaId}:{remoteWwpn}:{lunId}
    /// Success is 204.
    pub async fn remove_fc_lun(&self, lun_id: &str) -> Result<()> {
        let endpoint = format!("/fcluns/{lun_id}");
        let builder = self.plugin_request(Method::DELETE, &endpoint)?;
        self.send_no_content(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::GingerClient;
    use crate::types::AddFcLunRequest;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_add_and_remove_fc_lun() {
        let server = MockServer::start().await;
        let request = AddFcLunRequest {
            hba_id: "0.0.7100".to_string(),
            remote_wwpn: "0x500507680b244ac1".to_string(),
            lun_id: "0xc101000000000000".to_string(),
        };

        Mock::given(method("POST"))
            .and(path("/plugins/gingers390x/fcluns"))
            .and(body_json(serde_json::json!({
                "hbaId": "0.0.7100",
                "remoteWwpn": "0x500507680b244ac1",
                "lunId": "0xc101000000000000",
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let resource = request.resource_id();
        Mock::given(method("DELETE"))
            .and(path(format!("/plugins/gingers390x/fcluns/{resource}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        client.add_fc_lun(&request).await.unwrap();
        client.remove_fc_lun(&resource).await.unwrap();
    }

    #[tokio::test]
    async fn test_incomplete_add_request_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/plugins/gingers390x/fcluns"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "reason": "Missing parameter: hbaId",
            })))
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        let request = AddFcLunRequest {
            hba_id: String::new(),
            remote_wwpn: "0x500507680b244ac1".to_string(),
            lun_id: "0xc101000000000000".to_string(),
        };
        let err = client.add_fc_lun(&request).await.unwrap_err();
        assert_eq!(err.api_status(), Some(400));
    }
}
