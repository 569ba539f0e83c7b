use crate::application::dto::QueryResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<Vec<GraphEntry<'a>>>,
    count: usize,
    results: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: String,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Query {
    package: String,
    direction: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct GraphEntry<'a> {
    package: &'a str,
    #[serde(rename = "dependsOn")]
    depends_on: &'a [String],
}

/// JsonFormatter adapter producing a machine-readable report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &QueryResponse, include_graph: bool) -> Result<String> {
        let graph: Option<Vec<GraphEntry>> = include_graph.then(|| {
            response
                .graph
                .entries()
                .map(|(package, depends_on)| GraphEntry {
                    package,
                    depends_on,
                })
                .collect()
        });

        let report = Report {
            metadata: Metadata {
                timestamp: response.metadata.timestamp(),
                tool: Tool {
                    name: response.metadata.tool_name(),
                    version: response.metadata.tool_version(),
                },
            },
            query: Query {
                package: response.start_package.to_string(),
                direction: response.direction.to_string(),
                source: response.source.to_string(),
            },
            graph,
            count: response.reachable.len(),
            results: response.reachable.iter().collect(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
