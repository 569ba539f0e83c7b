use chrono::{DateTime, Utc};

const TOOL_NAME: &str = "depgraph";

/// ReportMetadata value object describing who produced a query report and when
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(generated_at: DateTime<Utc>, tool_name: String, tool_version: String) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
        }
    }

    /// Metadata stamped with the current time and this crate's version
    pub fn now() -> Self {
        Self::new(
            Utc::now(),
            TOOL_NAME.to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }

    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339()
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
