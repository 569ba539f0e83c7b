use crate::application::dto::{DependencyQuery, QueryResponse};
use crate::shared::Result;

/// DependencyQueryPort - Inbound port for reachability queries
///
/// One call answers one query: it either returns the complete result or
/// fails as a whole.
pub trait DependencyQueryPort {
    /// Loads the graph described by `query` and computes the reachable set
    ///
    /// # Errors
    /// Returns a `QueryError` (wrapped in `anyhow::Error`) if:
    /// - The local graph file cannot be read
    /// - The index cannot be reached or returns malformed metadata
    /// - The index host or the direction/source combination is not allowed
    fn query(&self, query: DependencyQuery) -> Result<QueryResponse>;
}
