/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports. The CLI itself is the
/// only inbound adapter and lives in the binary.
pub mod outbound;
