//! Domain models and operation-specific parameter types.

pub mod stats;
pub mod trigger;
