use crate::dependency_query::domain::DependencyGraph;

/// LocalGraphParser service for the line-oriented graph declaration format
///
/// ```text
/// A: B C
/// B: C D
/// C:
/// ```
///
/// Each line declares one package and its whitespace-separated dependencies.
/// Blank lines, lines without a colon and lines with an empty package name
/// are skipped rather than rejected, so one bad line never aborts the parse.
pub struct LocalGraphParser;

impl LocalGraphParser {
    pub fn parse(content: &str) -> DependencyGraph {
        content.lines().filter_map(Self::parse_line).collect()
    }

    fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
        let (package, deps) = line.trim().split_once(':')?;
        let package = package.trim();
        if package.is_empty() {
            return None;
        }

        let deps = deps.split_whitespace().map(str::to_string).collect();
        Some((package.to_string(), deps))
    }
}
