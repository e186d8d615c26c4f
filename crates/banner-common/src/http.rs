use std::future::Future;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::CommonError;

/// Read-only HTTP capability used by the catalog pipeline.
///
/// Implemented by [`SessionClient`] in production and by scripted fakes in
/// tests, so paging and enrichment logic can be exercised without a live
/// server.
pub trait HttpGet: Sync {
    fn get(&self, url: Url) -> impl Future<Output = Result<String, CommonError>> + Send;
}

#[derive(Clone, Debug)]
pub struct SessionClientConfig {
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for SessionClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            user_agent: "banner-tools/banner-catalog".to_string(),
        }
    }
}

/// HTTP client with a shared cookie jar.
///
/// Banner's self-service endpoints are session-oriented: the search API only
/// answers for cookies that were previously shown the registration pages. All
/// requests made through one `SessionClient` share a jar, so cookies set
/// while priming ride along on every later call.
#[derive(Clone)]
pub struct SessionClient {
    http: reqwest::Client,
}

impl SessionClient {
    pub fn new(config: SessionClientConfig) -> Result<Self, CommonError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { http })
    }
}

impl HttpGet for SessionClient {
    async fn get(&self, url: Url) -> Result<String, CommonError> {
        debug!(url = %url, "GET");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CommonError::Status {
                status,
                url: resp.url().to_string(),
            });
        }
        Ok(resp.text().await?)
    }
}
