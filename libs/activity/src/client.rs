use reqwest::StatusCode;
use tracing::debug;

use crate::{ActivityError, Config};

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, ActivityError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|source| ActivityError::BuildClient { source })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Issues a single GET for `path` and returns the body of a 200 response.
    ///
    /// Any other status is reported as [`ActivityError::FailedStatusCode`]
    /// without reading the body.
    pub async fn get(&self, path: &str) -> Result<String, ActivityError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(task = "send request", url = %url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ActivityError::Fetch { source })?;

        let status = response.status();
        debug!(task = "receive response", status = status.as_u16());

        if status != StatusCode::OK {
            return Err(ActivityError::FailedStatusCode {
                status_code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ActivityError::ReadBody { source })
    }
}
