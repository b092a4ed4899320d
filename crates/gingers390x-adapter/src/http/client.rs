/*
[INPUT]:  HTTP configuration (console base URL, timeouts, TLS policy)
[OUTPUT]: Configured reqwest client ready for console API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::{GingerError, Result};
use crate::types::ApiErrorBody;

/// URL prefix the plugin's resources are mounted under
const PLUGIN_ROOT: &str = "/plugins/gingers390x";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Accept the console's self-signed TLS certificate
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            accept_invalid_certs: false,
        }
    }
}

/// HTTP client for the console's s390x device-management plugin
#[derive(Debug)]
pub struct GingerClient {
    http_client: Client,
    base_url: Url,
}

impl GingerClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// The cookie store is always enabled; the console authenticates
    /// requests through the session cookie handed out by `POST /login`.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Console base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for endpoints outside the plugin root (login, tasks)
    fn root_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build full URL for plugin endpoints
    fn plugin_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("{PLUGIN_ROOT}{endpoint}"))?)
    }

    /// Build request builder for endpoints outside the plugin root
    pub(crate) fn root_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.root_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder for plugin endpoints
    pub(crate) fn plugin_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.plugin_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and deserialize the JSON body of a 2xx response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Send a request where success carries no body (201/204)
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Map non-2xx responses to structured errors, extracting the console's
/// `reason` message when one is present.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let reason = match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.reason.is_empty() => body.reason,
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    debug!(%url, status = status.as_u16(), reason = %reason, "console rejected request");

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(GingerError::Authentication { message: reason });
    }
    Err(GingerError::api_error(status, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = GingerClient::new("not a url").unwrap_err();
        assert!(matches!(err, GingerError::UrlParse(_)));
    }

    #[tokio::test]
    async fn test_error_reason_extracted_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins/gingers390x/nwdevices/bad"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "reason": "GS390XINVTYPE: unsupported device",
            })))
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        let builder = client
            .plugin_request(Method::GET, "/nwdevices/bad")
            .unwrap();
        let err = client
            .send_json::<serde_json::Value>(builder)
            .await
            .unwrap_err();

        match err {
            GingerError::Api { status, reason } => {
                assert_eq!(status, 400);
                assert!(reason.contains("GS390XINVTYPE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_reason_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plugins/gingers390x/lunscan"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GingerClient::new(&server.uri()).unwrap();
        let builder = client.plugin_request(Method::GET, "/lunscan").unwrap();
        let err = client
            .send_json::<serde_json::Value>(builder)
            .await
            .unwrap_err();

        assert_eq!(err.api_status(), Some(500));
    }
}
