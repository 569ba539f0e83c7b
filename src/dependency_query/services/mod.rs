pub mod graph_inverter;
pub mod local_graph_parser;
pub mod reachability_solver;
pub mod specifier_normalizer;

pub use graph_inverter::GraphInverter;
pub use local_graph_parser::LocalGraphParser;
pub use reachability_solver::ReachabilitySolver;
pub use specifier_normalizer::{NormalizationStage, SpecifierNormalizer};
