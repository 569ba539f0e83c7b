use crate::dependency_query::domain::{DependencyGraph, RemotePackageRef};
use crate::dependency_query::policies::IndexHostPolicy;
use crate::dependency_query::services::SpecifierNormalizer;
use crate::ports::outbound::MetadataFetcher;
use crate::shared::error::QueryError;
use crate::shared::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IndexPackageMetadata {
    #[serde(default)]
    info: Option<IndexPackageInfo>,
}

#[derive(Debug, Deserialize)]
struct IndexPackageInfo {
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
}

/// RemoteGraphLoader resolves one package release into a single-node graph
///
/// Only the immediate requirements of the requested release are known
/// afterwards; nothing is fetched transitively.
pub struct RemoteGraphLoader<F> {
    fetcher: F,
}

impl<F: MetadataFetcher> RemoteGraphLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches `<index>/<name>/<version>/json` and normalizes `requires_dist`
    ///
    /// # Errors
    /// - `QueryError::Policy` if the index host is not the official index
    /// - `QueryError::Validation` if name or version are unsafe in a URL path
    /// - `QueryError::MetadataFetch` if the request fails
    /// - `QueryError::MalformedResponse` if the body lacks an `info` object
    pub fn load(&self, reference: &RemotePackageRef) -> Result<DependencyGraph> {
        let url = Self::metadata_url(reference)?;
        let body = self.fetcher.fetch(&url)?;
        let specifiers = Self::parse_requires_dist(&url, &body)?;

        let dependencies = SpecifierNormalizer::normalize_all(&specifiers);
        Ok(DependencyGraph::from_declarations([(
            reference.package_name.as_str().to_string(),
            dependencies,
        )]))
    }

    /// Builds the metadata URL after the host policy and component checks pass
    pub fn metadata_url(reference: &RemotePackageRef) -> Result<String> {
        IndexHostPolicy::validate(&reference.index_base_url)?;
        Self::validate_url_component(reference.package_name.as_str(), "Package name")?;
        Self::validate_url_component(reference.version.as_str(), "Version")?;

        Ok(format!(
            "{}/{}/{}/json",
            reference.index_base_url.trim().trim_end_matches('/'),
            urlencoding::encode(reference.package_name.as_str()),
            urlencoding::encode(reference.version.as_str())
        ))
    }

    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        let problem = if component.contains('/') || component.contains('\\') {
            Some("path separators")
        } else if component.contains("..") {
            Some("'..'")
        } else if component.contains(['#', '?', '@']) {
            Some("URL-unsafe characters")
        } else {
            None
        };

        match problem {
            Some(problem) => Err(QueryError::Validation {
                message: format!(
                    "{} '{}' contains {} and cannot be used in an index URL",
                    component_type, component, problem
                ),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn parse_requires_dist(url: &str, body: &str) -> Result<Vec<String>> {
        let metadata: IndexPackageMetadata =
            serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse {
                url: url.to_string(),
                details: format!("Response is not valid package metadata JSON: {}", e),
            })?;

        let info = metadata.info.ok_or_else(|| QueryError::MalformedResponse {
            url: url.to_string(),
            details: "Response has no 'info' object".to_string(),
        })?;

        Ok(info.requires_dist.unwrap_or_default())
    }
}
