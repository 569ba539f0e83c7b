use crate::application::dto::QueryResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a query result
pub trait ReportFormatter {
    /// Renders the response; `include_graph` adds the loaded graph listing
    fn format(&self, response: &QueryResponse, include_graph: bool) -> Result<String>;
}
