/// Core value types and coordinate mapping.
pub mod core;
/// Crate-wide error type.
pub mod error;
/// Scalar and vector helpers shared by the field functions.
pub mod math;
