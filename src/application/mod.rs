/// Application layer - Use cases, loaders and DTOs
///
/// This layer orchestrates the domain services and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod loaders;
pub mod use_cases;
