/// Inbound ports (Driving ports) - Use case interfaces
pub mod dependency_query_port;

pub use dependency_query_port::DependencyQueryPort;
