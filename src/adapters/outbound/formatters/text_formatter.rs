use crate::application::dto::QueryResponse;
use crate::dependency_query::domain::Direction;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter producing the console listing
///
/// ```text
/// Dependency graph:
///   A -> B, C
///   B -> (none)
///
/// Transitive dependencies of A:
///  - B
///  - C
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_graph(out: &mut String, response: &QueryResponse) -> std::fmt::Result {
        writeln!(out, "Dependency graph:")?;
        if response.graph.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for (package, deps) in response.graph.entries() {
            if deps.is_empty() {
                writeln!(out, "  {} -> (none)", package)?;
            } else {
                writeln!(out, "  {} -> {}", package, deps.join(", "))?;
            }
        }
        writeln!(out)
    }

    fn write_results(out: &mut String, response: &QueryResponse) -> std::fmt::Result {
        let (heading, empty_marker) = match response.direction {
            Direction::Forward => ("Transitive dependencies of", "(no dependencies)"),
            Direction::Reverse => ("Reverse dependencies of", "(no reverse dependencies)"),
        };

        writeln!(out, "{} {}:", heading, response.start_package)?;
        if response.reachable.is_empty() {
            writeln!(out, " {}", empty_marker)?;
        }
        for name in response.reachable.iter() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &QueryResponse, include_graph: bool) -> Result<String> {
        let mut out = String::new();
        if include_graph {
            Self::write_graph(&mut out, response)?;
        }
        Self::write_results(&mut out, response)?;
        Ok(out)
    }
}
