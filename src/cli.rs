use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use depgraph::application::dto::{DependencyQuery, OutputFormat};
use depgraph::config::ConfigFile;
use depgraph::dependency_query::domain::{
    Direction, GraphSource, PackageName, RemotePackageRef, Version,
};
use depgraph::dependency_query::policies::DEFAULT_INDEX_URL;
use depgraph::shared::error::QueryError;
use depgraph::shared::Result;

/// Where the dependency graph comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Local,
    Remote,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(SourceMode::Local),
            "remote" => Ok(SourceMode::Remote),
            _ => Err(format!(
                "Invalid repository mode: {}. Please specify 'local' or 'remote'",
                s
            )),
        }
    }
}

/// Explore transitive and reverse dependencies of a package
#[derive(Parser, Debug)]
#[command(name = "depgraph")]
#[command(version)]
#[command(
    about = "Resolve transitive or reverse dependencies from a local graph file or the package index",
    long_about = None
)]
pub struct Args {
    /// Package to start the query from
    #[arg(long = "package-name", value_name = "NAME")]
    pub package_name: String,

    /// Graph file path (local mode) or index base URL (remote mode)
    #[arg(long = "repository-url", value_name = "PATH_OR_URL")]
    pub repository_url: Option<String>,

    /// Graph source: local or remote
    #[arg(long = "test-repo-mode", value_name = "MODE")]
    pub test_repo_mode: SourceMode,

    /// Package version (remote mode looks up exactly this release)
    #[arg(long = "package-version", value_name = "VERSION")]
    pub package_version: String,

    /// Query reverse dependencies instead of forward ones
    #[arg(
        long = "reverse-mode",
        value_name = "BOOL",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub reverse_mode: bool,

    /// Output format: text or json (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the loaded dependency graph before the results
    #[arg(long)]
    pub show_graph: bool,

    /// Path to a config file (defaults to depgraph.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validates the arguments and builds the query they describe.
    ///
    /// Failures are `QueryError::Validation`, which the binary maps to the
    /// invalid-arguments exit code.
    pub fn to_query(&self, config: &ConfigFile) -> Result<DependencyQuery> {
        let package_name = PackageName::new(self.package_name.clone())
            .map_err(|e| validation(format!("invalid package name: {}", e)))?;
        let version = Version::new(self.package_version.clone())
            .map_err(|e| validation(format!("invalid package version: {}", e)))?;

        let source = match self.test_repo_mode {
            SourceMode::Local => {
                let location = self.repository_url.as_deref().ok_or_else(|| {
                    validation("--repository-url is required in local mode".to_string())
                })?;
                GraphSource::LocalPath(validate_local_path(location)?)
            }
            SourceMode::Remote => {
                let location = self
                    .repository_url
                    .as_deref()
                    .or(config.index_url.as_deref())
                    .unwrap_or(DEFAULT_INDEX_URL);
                validate_remote_location(location)?;
                GraphSource::Remote(RemotePackageRef::new(
                    package_name.clone(),
                    version,
                    location.to_string(),
                ))
            }
        };

        Ok(DependencyQuery::new(
            package_name,
            source,
            Direction::from_reverse_flag(self.reverse_mode),
        ))
    }
}

fn validation(message: String) -> anyhow::Error {
    QueryError::Validation { message }.into()
}

fn validate_local_path(location: &str) -> Result<PathBuf> {
    let path = PathBuf::from(location);
    if !path.exists() {
        return Err(validation(format!(
            "File or directory '{}' not found",
            location
        )));
    }
    Ok(path)
}

fn validate_remote_location(location: &str) -> Result<()> {
    if !(location.starts_with("http://") || location.starts_with("https://")) {
        return Err(validation(format!(
            "Remote mode requires an http(s) repository URL, got '{}'",
            location
        )));
    }
    Ok(())
}
