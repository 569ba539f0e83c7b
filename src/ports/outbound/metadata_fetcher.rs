use crate::shared::Result;

/// MetadataFetcher port: "fetch the body for a URL"
///
/// Implementations perform exactly one request per call and never retry.
pub trait MetadataFetcher {
    /// Fetches the response body of `url`
    ///
    /// # Errors
    /// Returns `QueryError::MetadataFetch` carrying `url` on transport
    /// failure or a non-success status.
    fn fetch(&self, url: &str) -> Result<String>;
}
