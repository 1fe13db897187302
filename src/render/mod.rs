/// Parallel batch generation of a whole frame sequence.
pub mod scheduler;
