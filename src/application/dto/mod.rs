/// Data Transfer Objects for application layer
///
/// DTOs carry requests in from the CLI and results out to formatters,
/// keeping the domain layer isolated.
mod dependency_query;
mod output_format;
mod query_response;

pub use dependency_query::DependencyQuery;
pub use output_format::OutputFormat;
pub use query_response::QueryResponse;
