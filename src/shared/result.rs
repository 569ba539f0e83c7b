/// Crate-wide result type; typed failures travel as `QueryError` inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
