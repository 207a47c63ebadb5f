//! Invariant checkers for generated sequences.
//!
//! Each module defines the properties a sequence must satisfy.

pub mod sequence;

pub use sequence::{SequenceProperties, SequencePropertyChecker};
