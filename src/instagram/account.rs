//! Account-level Graph API calls: token probe and user lookup.

use log::{error, info, warn};
use reqwest::StatusCode;

use crate::error::InstagramError;

use super::api::send_graph_request;
use super::client::InstagramClient;
use super::types::UserInfo;

const USER_INFO_FIELDS: &str = "id,username,account_type,media_count";

impl InstagramClient {
    /// Checks the configured access token against `GET /me`.
    ///
    /// Returns `true` only for an HTTP 200 answer. Network failures and rejected
    /// tokens both yield `false`; the cause is only visible in the logs.
    pub async fn validate_access_token(&self) -> bool {
        info!("Validating Instagram access token");

        let url = self.endpoint("me");
        let request = self
            .http
            .get(&url)
            .query(&[("access_token", self.config.access_token.as_str())]);

        match request.send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("Access token is valid");
                true
            }
            Ok(response) => {
                warn!(
                    "Access token validation returned status {}",
                    response.status()
                );
                false
            }
            Err(e) => {
                error!("Error validating token: {}", e.without_url());
                false
            }
        }
    }

    /// Fetches id, username, account type and media count for the configured user.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure is returned as
    /// [`InstagramError::UpstreamRequest`].
    pub async fn get_user_info(&self) -> Result<UserInfo, InstagramError> {
        const OPERATION: &str = "get user info";
        info!("Fetching user info for Instagram user {}", self.config.user_id);

        let url = self.endpoint(&self.config.user_id);
        let request = self.http.get(&url).query(&[
            ("fields", USER_INFO_FIELDS),
            ("access_token", self.config.access_token.as_str()),
        ]);

        let body = send_graph_request(request, OPERATION).await?;
        serde_json::from_value(body).map_err(|e| {
            error!("Error getting user info: {}", e);
            InstagramError::upstream(OPERATION, format!("unexpected user info payload: {}", e))
        })
    }
}
