pub mod direction_policy;
pub mod index_host_policy;

pub use direction_policy::DirectionPolicy;
pub use index_host_policy::{IndexHostPolicy, DEFAULT_INDEX_URL, OFFICIAL_INDEX_HOST};
