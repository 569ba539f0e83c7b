//! depgraph - dependency graph explorer
//!
//! Loads a package dependency graph either from a local declaration file or
//! from one release's metadata on the package index, and answers
//! reachability queries over it: what a package transitively depends on, and
//! what transitively depends on it.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Domain Layer** (`dependency_query`): graph model, parsing, normalization,
//!   inversion, reachability and policies
//! - **Application Layer** (`application`): loaders, the query use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, network, console and formatters
//! - **Shared** (`shared`): error types and common utilities
//!
//! # Example
//!
//! ```no_run
//! use depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = QueryDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     PyPiMetadataFetcher::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let query = DependencyQuery::new(
//!     PackageName::new("A".to_string())?,
//!     GraphSource::LocalPath(PathBuf::from("graph.txt")),
//!     Direction::Forward,
//! );
//! let response = use_case.execute(query)?;
//!
//! for name in response.reachable.iter() {
//!     println!("{}", name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_query;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::PyPiMetadataFetcher;
    pub use crate::application::dto::{DependencyQuery, OutputFormat, QueryResponse};
    pub use crate::application::loaders::{LocalGraphLoader, RemoteGraphLoader};
    pub use crate::application::use_cases::QueryDependenciesUseCase;
    pub use crate::dependency_query::domain::{
        DependencyGraph, Direction, GraphSource, PackageName, ReachableSet, RemotePackageRef,
        ReportMetadata, Version,
    };
    pub use crate::dependency_query::policies::{DirectionPolicy, IndexHostPolicy, DEFAULT_INDEX_URL};
    pub use crate::dependency_query::services::{
        GraphInverter, LocalGraphParser, ReachabilitySolver, SpecifierNormalizer,
    };
    pub use crate::ports::inbound::DependencyQueryPort;
    pub use crate::ports::outbound::{
        GraphFileReader, MetadataFetcher, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, QueryError};
    pub use crate::shared::Result;
}
