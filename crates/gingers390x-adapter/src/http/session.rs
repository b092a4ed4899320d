/*
[INPUT]:  Console credentials
[OUTPUT]: Authenticated session (cookie retained by the client)
[POS]:    HTTP layer - console login/logout
[UPDATE]: When the console auth endpoints change
*/

use reqwest::Method;
use tracing::info;

use crate::http::{GingerClient, Result};
use crate::types::{LoginRequest, LoginResponse};

impl GingerClient {
    /// Log in to the console
    ///
    /// POST /login
    /// The session cookie from the response is kept in the client's cookie
    /// store and sent on every subsequent request.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let builder = self.root_request(Method::POST, "/login")?.json(request);
        let response: LoginResponse = self.send_json(builder).await?;
        info!(username = %response.username, "logged in to console");
        Ok(response)
    }

    /// End the console session
    ///
    /// POST /logout
    pub async fn logout(&self) -> Result<()> {
        let builder = self.root_request(Method::POST, "/logout")?;
        self.send_no_content(builder).await
    }
}
