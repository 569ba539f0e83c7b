use crate::dependency_query::domain::{Direction, GraphSource};
use crate::shared::error::QueryError;
use crate::shared::Result;

/// DirectionPolicy deciding which direction/source pairs can be answered
///
/// A remote lookup only knows one package's outgoing edges, so its
/// transpose says nothing about who depends on that package. Reverse
/// queries therefore require a complete local graph.
pub struct DirectionPolicy;

impl DirectionPolicy {
    pub fn ensure_supported(direction: Direction, source: &GraphSource) -> Result<()> {
        if direction == Direction::Reverse && source.is_remote() {
            return Err(QueryError::Policy {
                reason: "Reverse dependencies are not supported for remote sources".to_string(),
                hint: "Use --test-repo-mode local with a graph file containing the full dependency graph"
                    .to_string(),
            }
            .into());
        }
        Ok(())
    }
}
