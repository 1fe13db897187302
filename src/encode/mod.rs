/// PNG writers.
pub mod png;
/// Frame commit contract.
pub mod sink;
