// =============================================================================
// fetch.rs — THE PAGE COURIER
// =============================================================================
//
// One reqwest client, built once, used for the whole run. Every page goes
// through fetch_page, which enforces the single success criterion this
// system has: a success status code. Anything else comes back as a
// FetchError that keeps the response body, since the registry's error pages
// are usually the best diagnostic available.
//
// No retries, no backoff. A registry that answers 500 once gets to explain
// itself to a human.
// =============================================================================

use anyhow::Context;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build the HTTP client with the configured timeout and user agent.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("failed to build HTTP client")?;

        Ok(Fetcher { client })
    }

    /// GET one page and return its body text.
    ///
    /// The body is read before the status check so a non-success response
    /// can carry what the server actually said.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        debug!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}
