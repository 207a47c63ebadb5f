//! # seq-core
//!
//! Core types for OEIS A005243: the error taxonomy shared by every crate
//! in the workspace, and the invariant checker that decides whether a list
//! of integers is a prefix of the sequence.
//!
//! ## Definition
//!
//! `a_1 = 1`, `a_2 = 2`, and for `k >= 3` the term `a_k` is the least
//! integer strictly greater than `a_{k-1}` that is a sum of two or more
//! consecutive terms among `a_1..a_{k-1}`.
//!
//! ## Properties
//!
//! | Property | Description |
//! |----------|-------------|
//! | SeedTerms | `a_1 = 1` and `a_2 = 2` |
//! | StrictlyIncreasing | Every term exceeds its predecessor |
//! | Representable | `a_k` is a run-sum of >= 2 earlier terms |
//! | Minimal | No run-sum lies strictly between `a_{k-1}` and `a_k` |

pub mod counterexample;
pub mod error;
pub mod invariants;
pub mod property;

pub use counterexample::{Counterexample, StateSnapshot};
pub use error::SequenceError;
pub use invariants::{SequenceProperties, SequencePropertyChecker};
pub use property::{PropertyChecker, PropertyResult, PropertySummary};

/// First term of the sequence.
pub const FIRST_TERM: u64 = 1;

/// Second term of the sequence.
pub const SECOND_TERM: u64 = 2;
