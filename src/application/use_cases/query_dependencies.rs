use crate::application::dto::{DependencyQuery, QueryResponse};
use crate::application::loaders::{LocalGraphLoader, RemoteGraphLoader};
use crate::dependency_query::domain::{
    DependencyGraph, Direction, GraphSource, RemotePackageRef, ReportMetadata,
};
use crate::dependency_query::policies::DirectionPolicy;
use crate::dependency_query::services::{GraphInverter, ReachabilitySolver};
use crate::ports::inbound::DependencyQueryPort;
use crate::ports::outbound::{GraphFileReader, MetadataFetcher, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// QueryDependenciesUseCase - answers one reachability query end to end
///
/// Picks the loader for the query's graph source, inverts the graph for
/// reverse queries and runs the reachability solver. All infrastructure is
/// injected through generic ports.
///
/// # Type Parameters
/// * `GR` - GraphFileReader implementation
/// * `MF` - MetadataFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryDependenciesUseCase<GR, MF, PR> {
    local_loader: LocalGraphLoader<GR>,
    remote_loader: RemoteGraphLoader<MF>,
    progress_reporter: PR,
}

impl<GR, MF, PR> QueryDependenciesUseCase<GR, MF, PR>
where
    GR: GraphFileReader,
    MF: MetadataFetcher,
    PR: ProgressReporter,
{
    /// Creates a new QueryDependenciesUseCase with injected dependencies
    pub fn new(graph_file_reader: GR, metadata_fetcher: MF, progress_reporter: PR) -> Self {
        Self {
            local_loader: LocalGraphLoader::new(graph_file_reader),
            remote_loader: RemoteGraphLoader::new(metadata_fetcher),
            progress_reporter,
        }
    }

    /// Executes the query
    ///
    /// Unsupported direction/source pairs are refused before anything is
    /// read or fetched. A start package missing from the graph is not an
    /// error and produces an empty result.
    pub fn execute(&self, query: DependencyQuery) -> Result<QueryResponse> {
        // Step 1: Refuse combinations that cannot be answered
        DirectionPolicy::ensure_supported(query.direction, &query.source)?;

        // Step 2: Acquire the graph
        let graph = self.load_graph(&query.source)?;

        // Step 3: Traverse in the requested direction
        let reachable = match query.direction {
            Direction::Forward => {
                ReachabilitySolver::reachable_from(&graph, query.start_package.as_str())
            }
            Direction::Reverse => {
                let inverted = GraphInverter::invert(&graph);
                ReachabilitySolver::reachable_from(&inverted, query.start_package.as_str())
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Found {} {} dependency(ies) of {}",
            reachable.len(),
            Self::direction_label(query.direction),
            query.start_package
        ));

        Ok(QueryResponse::new(
            query.start_package,
            query.direction,
            query.source,
            graph,
            reachable,
            ReportMetadata::now(),
        ))
    }

    fn load_graph(&self, source: &GraphSource) -> Result<DependencyGraph> {
        match source {
            GraphSource::LocalPath(path) => self.load_local_graph(path),
            GraphSource::Remote(reference) => self.load_remote_graph(reference),
        }
    }

    fn load_local_graph(&self, path: &Path) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency graph from: {}",
            path.display()
        ));

        let graph = self.local_loader.load(path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} declared package(s) with {} edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));

        Ok(graph)
    }

    fn load_remote_graph(&self, reference: &RemotePackageRef) -> Result<DependencyGraph> {
        self.progress_reporter.report_activity(&format!(
            "🌐 Fetching metadata for {}=={} from {}",
            reference.package_name, reference.version, reference.index_base_url
        ));

        match self.remote_loader.load(reference) {
            Ok(graph) => {
                self.progress_reporter.report(&format!(
                    "✅ {} declares {} direct requirement(s)",
                    reference.package_name,
                    graph.dependencies_of(reference.package_name.as_str()).len()
                ));
                Ok(graph)
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Could not load metadata for {}=={}",
                    reference.package_name, reference.version
                ));
                Err(e)
            }
        }
    }

    fn direction_label(direction: Direction) -> &'static str {
        match direction {
            Direction::Forward => "transitive",
            Direction::Reverse => "reverse",
        }
    }
}

impl<GR, MF, PR> DependencyQueryPort for QueryDependenciesUseCase<GR, MF, PR>
where
    GR: GraphFileReader,
    MF: MetadataFetcher,
    PR: ProgressReporter,
{
    fn query(&self, query: DependencyQuery) -> Result<QueryResponse> {
        self.execute(query)
    }
}
