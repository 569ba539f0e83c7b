use crate::ports::outbound::MetadataFetcher;
use crate::shared::error::QueryError;
use crate::shared::Result;
use std::error::Error as StdError;
use std::time::Duration;

/// Request timeout for a single metadata fetch
const FETCH_TIMEOUT_SECS: u64 = 10;

/// PyPiMetadataFetcher adapter for the package index JSON API
///
/// Blocking and single-shot: one `GET` per call, no retries, no caching.
pub struct PyPiMetadataFetcher {
    client: reqwest::blocking::Client,
}

impl PyPiMetadataFetcher {
    /// Creates a fetcher with the default timeout and a `depgraph/<version>`
    /// user agent
    pub fn new() -> Result<Self> {
        let user_agent = format!("depgraph/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn fetch_error(url: &str, details: String) -> anyhow::Error {
        QueryError::MetadataFetch {
            url: url.to_string(),
            details,
        }
        .into()
    }

    /// Renders an error with every underlying cause, e.g.
    /// `error sending request: client error (Connect): tcp connect error: Connection refused`
    fn describe(error: &dyn StdError) -> String {
        let mut details = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            details.push_str(": ");
            details.push_str(&cause.to_string());
            source = cause.source();
        }
        details
    }
}

// No Default: building the client can fail and that must reach the caller.

impl MetadataFetcher for PyPiMetadataFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Self::fetch_error(url, Self::describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::fetch_error(
                url,
                format!("Package index returned status code {}", status),
            ));
        }

        response.text().map_err(|e| {
            Self::fetch_error(
                url,
                format!("Failed to read response body: {}", Self::describe(&e)),
            )
        })
    }
}
