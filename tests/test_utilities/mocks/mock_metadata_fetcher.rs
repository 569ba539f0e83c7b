use std::sync::{Arc, Mutex};
use depgraph::prelude::*;

/// Mock MetadataFetcher returning a canned body and recording requested URLs
#[derive(Clone)]
pub struct MockMetadataFetcher {
    pub body: String,
    pub should_fail: bool,
    pub requested_urls: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            should_fail: false,
            requested_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Body shaped like an index JSON API response
    pub fn with_requires_dist(requires_dist: &[&str]) -> Self {
        let body = serde_json::json!({
            "info": {
                "name": "mock",
                "requires_dist": requires_dist,
            }
        });
        Self::new(&body.to_string())
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

impl MetadataFetcher for MockMetadataFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        if self.should_fail {
            return Err(QueryError::MetadataFetch {
                url: url.to_string(),
                details: "Mock connection refused".to_string(),
            }
            .into());
        }
        Ok(self.body.clone())
    }
}
