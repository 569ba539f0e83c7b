/// Use cases module containing application business logic orchestration
mod query_dependencies;

pub use query_dependencies::QueryDependenciesUseCase;
