/// Graph acquisition strategies
///
/// Each loader pairs an outbound port (where the bytes come from) with the
/// domain services that turn those bytes into a `DependencyGraph`.
mod local_graph_loader;
mod remote_graph_loader;

pub use local_graph_loader::LocalGraphLoader;
pub use remote_graph_loader::RemoteGraphLoader;
