use crate::shared::error::QueryError;
use crate::shared::Result;

/// The only package index host remote lookups may contact
pub const OFFICIAL_INDEX_HOST: &str = "pypi.org";

/// JSON API base used when no index URL is configured
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";

/// IndexHostPolicy restricting remote lookups to the official index
///
/// The host is taken from the URL authority, so look-alikes such as
/// `https://pypi.org.evil.test` or `https://pypi.org@evil.test` are refused.
/// Checks run before any request is built.
pub struct IndexHostPolicy;

impl IndexHostPolicy {
    pub fn validate(index_base_url: &str) -> Result<()> {
        let host = Self::extract_host(index_base_url).ok_or_else(|| QueryError::Policy {
            reason: format!(
                "Index URL '{}' is not an http(s) URL with a plain host",
                index_base_url
            ),
            hint: format!("Use the official index JSON API, e.g. {}", DEFAULT_INDEX_URL),
        })?;

        if host != OFFICIAL_INDEX_HOST {
            return Err(QueryError::Policy {
                reason: format!(
                    "Index host '{}' is not allowed; remote lookups are limited to {}",
                    host, OFFICIAL_INDEX_HOST
                ),
                hint: format!("Use the official index JSON API, e.g. {}", DEFAULT_INDEX_URL),
            }
            .into());
        }

        Ok(())
    }

    /// Lowercased host of an http(s) URL; `None` for other schemes or URLs
    /// carrying userinfo
    fn extract_host(url: &str) -> Option<String> {
        let lower = url.trim().to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"))?;

        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if authority.is_empty() || authority.contains('@') {
            return None;
        }

        let host = match authority.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            Some(_) => return None,
            None => authority,
        };

        Some(host.trim_end_matches('.').to_string())
    }
}
