use super::{PackageName, Version};
use std::fmt;
use std::path::PathBuf;

/// Which way edges are followed when computing the reachable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// What does the package transitively depend on
    #[default]
    Forward,
    /// What transitively depends on the package
    Reverse,
}

impl Direction {
    pub fn from_reverse_flag(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// A single package release on a package index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePackageRef {
    pub package_name: PackageName,
    pub version: Version,
    /// Base URL of the index JSON API, e.g. `https://pypi.org/pypi`
    pub index_base_url: String,
}

impl RemotePackageRef {
    pub fn new(package_name: PackageName, version: Version, index_base_url: String) -> Self {
        Self {
            package_name,
            version,
            index_base_url,
        }
    }
}

/// Where the dependency graph comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Local declaration file in `pkg: dep dep` format
    LocalPath(PathBuf),
    /// One-hop lookup of a release's declared requirements
    Remote(RemotePackageRef),
}

impl GraphSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, GraphSource::Remote(_))
    }
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphSource::LocalPath(path) => write!(f, "{}", path.display()),
            GraphSource::Remote(remote) => write!(
                f,
                "{} ({}=={})",
                remote.index_base_url, remote.package_name, remote.version
            ),
        }
    }
}
