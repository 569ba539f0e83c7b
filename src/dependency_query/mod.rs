//! Domain layer: the dependency graph model and the pure services that
//! parse, normalize, invert and traverse it. Nothing here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
