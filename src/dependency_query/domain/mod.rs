pub mod dependency_graph;
pub mod package;
pub mod query;
pub mod reachable_set;
pub mod report_metadata;

pub use dependency_graph::DependencyGraph;
pub use package::{PackageName, Version};
pub use query::{Direction, GraphSource, RemotePackageRef};
pub use reachable_set::ReachableSet;
pub use report_metadata::ReportMetadata;
